//! Repository round-trip tests against an in-memory SQLite database.

use chrono::{TimeZone, Utc};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use espi_datacustodian::domain::authorization::{
    Authorization, AuthorizationStatus, GrantType, TokenType,
};
use espi_datacustodian::domain::codes::{
    CustomerKind, NotificationMethodKind, QualityOfReading, ServiceKind, SupplierKind,
    UnitMultiplier, UnitSymbol,
};
use espi_datacustodian::domain::customer_account::{
    AccountNotification, CustomerAccount, Organisation,
};
use espi_datacustodian::domain::meter_reading::{IntervalBlock, IntervalReading, MeterReading};
use espi_datacustodian::domain::reading_type::ReadingType;
use espi_datacustodian::domain::retail_customer::RetailCustomer;
use espi_datacustodian::domain::subscription::Subscription;
use espi_datacustodian::domain::usage_point::{ServiceDeliveryPoint, UsagePoint};
use espi_datacustodian::domain::values::{
    DateTimeInterval, ElectronicAddress, Status, StreetAddress, SummaryMeasurement,
    TelephoneNumber,
};
use espi_datacustodian::domain::{RepositoryProvider, Resource};
use espi_datacustodian::{DatabaseRepositoryProvider, Migrator};

async fn provider() -> DatabaseRepositoryProvider {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    DatabaseRepositoryProvider::new(db)
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

fn usage_point_graph() -> UsagePoint {
    let reading_type = ReadingType {
        resource: resource("ReadingType", "1"),
        meter_reading_id: None,
        accumulation_behaviour: None,
        commodity: None,
        consumption_tier: None,
        currency: None,
        data_qualifier: None,
        default_quality: Some(QualityOfReading::Valid),
        flow_direction: None,
        interval_length: Some(900),
        kind: None,
        phase: None,
        power_of_ten_multiplier: Some(UnitMultiplier::None),
        time_attribute: None,
        uom: Some(UnitSymbol::WattHours),
        cpp: None,
        tou: None,
        argument: None,
        interharmonic: None,
    };

    let block = IntervalBlock {
        resource: resource("IntervalBlock", "1"),
        meter_reading_id: None,
        readings: vec![
            IntervalReading {
                time_period: DateTimeInterval::new(200, 10),
                value: 7,
                cost: None,
                consumption_tier: None,
                tou: None,
                cpp: None,
                quality: Some(QualityOfReading::Valid),
            },
            IntervalReading {
                time_period: DateTimeInterval::new(100, 50),
                value: 5,
                cost: Some(1_050),
                consumption_tier: None,
                tou: None,
                cpp: None,
                quality: None,
            },
        ],
    };

    let meter_reading = MeterReading {
        resource: resource("MeterReading", "1"),
        usage_point_id: None,
        reading_type: Some(reading_type),
        interval_blocks: vec![block],
    };

    UsagePoint {
        resource: resource("UsagePoint", "1"),
        role_flags: Some(vec![0x0d]),
        service_category: ServiceKind::Electricity,
        connection_state: None,
        phase_code: None,
        status: Some(1),
        service_delivery_point: Some(ServiceDeliveryPoint {
            name: Some("Front Electric Meter".into()),
            tariff_profile: None,
            customer_agreement: None,
        }),
        local_time_parameters: None,
        retail_customer_id: None,
        estimated_load: Some(SummaryMeasurement::new(
            9500,
            UnitSymbol::Watts,
            UnitMultiplier::None,
        )),
        nominal_service_voltage: None,
        rated_current: None,
        rated_power: None,
        acceptance_test: None,
        lifecycle: None,
        pnode_refs: vec![],
        aggregate_node_refs: vec![],
        meter_readings: vec![meter_reading],
        power_quality_summaries: vec![],
        usage_summaries: vec![],
    }
}

#[tokio::test]
async fn usage_point_graph_round_trip() {
    let repos = provider().await;
    let up = usage_point_graph();
    let id = up.resource.id;
    repos.usage_points().save(up).await.unwrap();

    let loaded = repos.usage_points().find_by_id(id).await.unwrap().unwrap();
    assert_eq!(loaded.service_category, ServiceKind::Electricity);
    assert_eq!(loaded.role_flags.as_deref(), Some(&[0x0d][..]));
    assert_eq!(
        loaded
            .service_delivery_point
            .as_ref()
            .and_then(|sdp| sdp.name.as_deref()),
        Some("Front Electric Meter")
    );
    assert_eq!(loaded.meter_readings.len(), 1);

    let mr = &loaded.meter_readings[0];
    assert!(mr.reading_type.is_some());
    assert_eq!(mr.interval_blocks.len(), 1);

    // Readings come back ordered by interval start.
    let readings = &mr.interval_blocks[0].readings;
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].time_period.start, 100);
    assert_eq!(readings[1].time_period.start, 200);
}

#[tokio::test]
async fn saved_children_are_visible_through_their_own_repositories() {
    let repos = provider().await;
    let up = usage_point_graph();
    let mr_id = up.meter_readings[0].resource.id;
    let block_id = up.meter_readings[0].interval_blocks[0].resource.id;
    let rt_id = up.meter_readings[0]
        .reading_type
        .as_ref()
        .unwrap()
        .resource
        .id;
    repos.usage_points().save(up).await.unwrap();

    let mr = repos
        .meter_readings()
        .find_by_id(mr_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(mr.interval_blocks.len(), 1);

    let block = repos
        .interval_blocks()
        .find_by_id(block_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(block.meter_reading_id, Some(mr_id));
    assert_eq!(block.overall_interval(), Some(DateTimeInterval::new(100, 110)));

    let rt = repos
        .reading_types()
        .find_by_id(rt_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(rt.interval_length, Some(900));
    assert_eq!(rt.uom, Some(UnitSymbol::WattHours));
}

#[tokio::test]
async fn never_stored_id_is_none() {
    let repos = provider().await;
    let id = Uuid::new_v4();
    assert!(repos.usage_points().find_by_id(id).await.unwrap().is_none());
    assert!(repos.meter_readings().find_by_id(id).await.unwrap().is_none());
    assert!(repos.interval_blocks().find_by_id(id).await.unwrap().is_none());
    assert!(repos.reading_types().find_by_id(id).await.unwrap().is_none());
    assert!(repos.retail_customers().find_by_id(id).await.unwrap().is_none());
    assert!(repos.customer_accounts().find_by_id(id).await.unwrap().is_none());
    assert!(repos.subscriptions().find_by_id(id).await.unwrap().is_none());
    assert!(repos.authorizations().find_by_id(id).await.unwrap().is_none());
    assert!(repos
        .application_information()
        .find_by_id(id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn retail_customer_round_trip() {
    let repos = provider().await;
    let customer = RetailCustomer {
        resource: resource("RetailCustomer", "1"),
        username: "alan".into(),
        first_name: Some("Alan".into()),
        last_name: None,
        enabled: true,
        role: "ROLE_USER".into(),
    };
    let id = customer.resource.id;
    repos.retail_customers().save(customer).await.unwrap();

    let loaded = repos
        .retail_customers()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.username, "alan");
    assert_eq!(loaded.first_name.as_deref(), Some("Alan"));
    assert!(loaded.last_name.is_none());
    assert!(loaded.enabled);
}

#[tokio::test]
async fn customer_account_round_trip_with_organisation() {
    let repos = provider().await;
    let account = CustomerAccount {
        resource: resource("CustomerAccount", "1"),
        retail_customer_id: None,
        account_id: Some("ACC-0001".into()),
        customer_kind: Some(CustomerKind::Residential),
        supplier_kind: Some(SupplierKind::Utility),
        billing_cycle: Some("monthly".into()),
        budget_bill: None,
        last_bill_amount: Some(15_303_000),
        doc_status: None,
        status: Some(Status {
            value: Some("active".into()),
            date_time: Some(1_700_000_000),
            reason: None,
            remark: None,
        }),
        title: None,
        organisation: Some(Organisation {
            organisation_name: Some("Alan Turing".into()),
            street_address: StreetAddress {
                street_detail: Some("1 Main St".into()),
                town_detail: None,
                state_or_province: None,
                postal_code: None,
                country: None,
            },
            postal_address: StreetAddress::default(),
            phone1: TelephoneNumber::default(),
            phone2: TelephoneNumber::default(),
            electronic_address: ElectronicAddress {
                email1: Some("alan@example.com".into()),
                email2: None,
                web: None,
                radio: None,
            },
        }),
        notifications: vec![AccountNotification {
            method_kind: Some(NotificationMethodKind::Email),
            note: Some("Welcome letter sent".into()),
            time: Some(1_700_000_000),
        }],
    };
    let id = account.resource.id;
    repos.customer_accounts().save(account).await.unwrap();

    let loaded = repos
        .customer_accounts()
        .find_by_id(id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.customer_kind, Some(CustomerKind::Residential));
    assert_eq!(loaded.supplier_kind, Some(SupplierKind::Utility));
    assert!(loaded.doc_status.is_none());
    assert_eq!(
        loaded.status.as_ref().and_then(|s| s.value.as_deref()),
        Some("active")
    );
    let org = loaded.organisation.unwrap();
    assert_eq!(org.organisation_name.as_deref(), Some("Alan Turing"));
    assert_eq!(org.street_address.street_detail.as_deref(), Some("1 Main St"));
    assert_eq!(loaded.notifications.len(), 1);
    assert_eq!(
        loaded.notifications[0].method_kind,
        Some(NotificationMethodKind::Email)
    );
}

#[tokio::test]
async fn oauth_family_round_trip() {
    let repos = provider().await;

    let authorization = Authorization {
        resource: resource("Authorization", "1"),
        access_token: Some("token".into()),
        refresh_token: None,
        token_type: Some(TokenType::Bearer),
        grant_type: Some(GrantType::AuthorizationCode),
        scope: Some("FB=1_3".into()),
        status: AuthorizationStatus::Active,
        expires_at: Some(1_800_000_000),
        authorized_period: Some(DateTimeInterval::new(1_700_000_000, 31_536_000)),
        published_period: None,
        error: None,
        error_description: None,
        resource_uri: None,
        authorization_uri: None,
        third_party: Some("third_party_1".into()),
        retail_customer_id: None,
        application_information_id: None,
    };
    let auth_id = authorization.resource.id;
    repos.authorizations().save(authorization).await.unwrap();

    let loaded = repos
        .authorizations()
        .find_by_id(auth_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.status, AuthorizationStatus::Active);
    assert_eq!(loaded.grant_type, Some(GrantType::AuthorizationCode));
    assert_eq!(
        loaded.authorized_period,
        Some(DateTimeInterval::new(1_700_000_000, 31_536_000))
    );
    assert!(loaded.published_period.is_none());

    let subscription = Subscription {
        resource: resource("Subscription", "1"),
        hashed_id: Some("b3a1f".into()),
        last_update: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        retail_customer_id: None,
        authorization_id: Some(auth_id),
        application_information_id: None,
    };
    let sub_id = subscription.resource.id;
    repos.subscriptions().save(subscription).await.unwrap();

    let loaded = repos
        .subscriptions()
        .find_by_id(sub_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.hashed_id.as_deref(), Some("b3a1f"));
    assert_eq!(loaded.authorization_id, Some(auth_id));
}

#[tokio::test]
async fn find_all_is_ordered_by_self_href() {
    let repos = provider().await;
    for key in ["3", "1", "2"] {
        let customer = RetailCustomer {
            resource: resource("RetailCustomer", key),
            username: format!("user{}", key),
            first_name: None,
            last_name: None,
            enabled: true,
            role: "ROLE_USER".into(),
        };
        repos.retail_customers().save(customer).await.unwrap();
    }

    let all = repos.retail_customers().find_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(names, vec!["user1", "user2", "user3"]);
}
