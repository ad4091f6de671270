//! Endpoint tests: oneshot requests against the full router with an
//! in-memory SQLite database behind it.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;
use uuid::Uuid;

use espi_datacustodian::domain::codes::{QualityOfReading, ServiceKind};
use espi_datacustodian::domain::meter_reading::{IntervalBlock, IntervalReading, MeterReading};
use espi_datacustodian::domain::retail_customer::RetailCustomer;
use espi_datacustodian::domain::usage_point::UsagePoint;
use espi_datacustodian::domain::values::DateTimeInterval;
use espi_datacustodian::domain::{RepositoryProvider, Resource};
use espi_datacustodian::{create_api_router, DatabaseRepositoryProvider, Migrator};

async fn setup() -> (Router, Arc<dyn RepositoryProvider>) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let repos: Arc<dyn RepositoryProvider> = Arc::new(DatabaseRepositoryProvider::new(db));
    let handle = PrometheusBuilder::new().build_recorder().handle();
    (create_api_router(repos.clone(), handle), repos)
}

fn resource(type_name: &str, key: &str) -> Resource {
    let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    Resource::from_href(
        &format!("/espi/1_1/resource/{}/{}", type_name, key),
        &format!("/espi/1_1/resource/{}", type_name),
        None,
        t,
        t,
    )
}

fn usage_point_with_block() -> UsagePoint {
    let block = IntervalBlock {
        resource: resource("IntervalBlock", "1"),
        meter_reading_id: None,
        readings: vec![IntervalReading {
            time_period: DateTimeInterval::new(100, 50),
            value: 5,
            cost: None,
            consumption_tier: None,
            tou: None,
            cpp: None,
            quality: Some(QualityOfReading::Valid),
        }],
    };
    UsagePoint {
        resource: resource("UsagePoint", "1"),
        role_flags: None,
        service_category: ServiceKind::Electricity,
        connection_state: None,
        phase_code: None,
        status: None,
        service_delivery_point: None,
        local_time_parameters: None,
        retail_customer_id: None,
        estimated_load: None,
        nominal_service_voltage: None,
        rated_current: None,
        rated_power: None,
        acceptance_test: None,
        lifecycle: None,
        pnode_refs: vec![],
        aggregate_node_refs: vec![],
        meter_readings: vec![MeterReading {
            resource: resource("MeterReading", "1"),
            usage_point_id: None,
            reading_type: None,
            interval_blocks: vec![block],
        }],
        power_quality_summaries: vec![],
        usage_summaries: vec![],
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn stored_interval_block_is_served_as_atom_entry() {
    let (router, repos) = setup().await;
    let up = usage_point_with_block();
    let block_id = up.meter_readings[0].interval_blocks[0].resource.id;
    repos.usage_points().save(up).await.unwrap();

    let (status, content_type, body) = get(
        &router,
        &format!("/espi/1_1/resource/IntervalBlock/{}", block_id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/atom+xml"));
    assert!(body.contains(&format!("urn:uuid:{}", block_id)));
    assert!(body.contains("http://naesb.org/espi"));
    // The block's single reading spans (100, 50).
    assert!(body.contains("espi:duration>50<"));
    assert!(body.contains("espi:start>100<"));
}

#[tokio::test]
async fn unknown_interval_block_is_404_naming_the_id() {
    let (router, _repos) = setup().await;
    let id = Uuid::new_v4();
    let (status, _, body) = get(
        &router,
        &format!("/espi/1_1/resource/IntervalBlock/{}", id),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains(&id.to_string()));
    assert!(body.contains("not found"));
}

#[tokio::test]
async fn empty_collection_lists_as_200_feed() {
    let (router, _repos) = setup().await;
    let (status, content_type, body) = get(&router, "/espi/1_1/resource/IntervalBlock").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/atom+xml"));
    assert!(body.contains("<feed"));
    assert!(!body.contains("<entry>"));
}

#[tokio::test]
async fn malformed_uuid_is_a_client_error() {
    let (router, _repos) = setup().await;
    let (status, _, _) = get(&router, "/espi/1_1/resource/IntervalBlock/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn retail_customers_are_served_as_json_envelope() {
    let (router, repos) = setup().await;
    let customer = RetailCustomer {
        resource: resource("RetailCustomer", "1"),
        username: "alan".into(),
        first_name: None,
        last_name: None,
        enabled: true,
        role: "ROLE_USER".into(),
    };
    let id = customer.resource.id;
    repos.retail_customers().save(customer).await.unwrap();

    let (status, _, body) = get(&router, "/espi/1_1/resource/RetailCustomer").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"][0]["username"], "alan");

    let (status, _, body) = get(
        &router,
        &format!("/espi/1_1/resource/RetailCustomer/{}", id),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["resource"]["id"], id.to_string());
}

#[tokio::test]
async fn unknown_retail_customer_is_404_json_error() {
    let (router, _repos) = setup().await;
    let id = Uuid::new_v4();
    let (status, _, body) = get(
        &router,
        &format!("/espi/1_1/resource/RetailCustomer/{}", id),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains(&id.to_string()));
}

#[tokio::test]
async fn health_answers_ok() {
    let (router, _repos) = setup().await;
    let (status, _, body) = get(&router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
