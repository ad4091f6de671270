//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::{customer, health, metrics, oauth, usage};
use crate::domain::RepositoryProvider;

/// Shared state for every resource route.
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub metrics: PrometheusHandle,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        metrics::metrics_handler,
        // Usage family (Atom XML)
        usage::list_usage_points,
        usage::get_usage_point,
        usage::list_meter_readings,
        usage::get_meter_reading,
        usage::list_interval_blocks,
        usage::get_interval_block,
        usage::list_reading_types,
        usage::get_reading_type,
        usage::list_power_quality_summaries,
        usage::get_power_quality_summary,
        usage::list_usage_summaries,
        usage::get_usage_summary,
        // Customer family (JSON)
        customer::list_retail_customers,
        customer::get_retail_customer,
        customer::list_customer_accounts,
        customer::get_customer_account,
        // OAuth family (JSON)
        oauth::list_subscriptions,
        oauth::get_subscription,
        oauth::list_authorizations,
        oauth::get_authorization,
        oauth::list_application_information,
        oauth::get_application_information,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Customer
            RetailCustomerDto,
            CustomerAccountDto,
            crate::api::dto::customer::ResourceDto,
            crate::api::dto::customer::StatusDto,
            crate::api::dto::customer::OrganisationDto,
            crate::api::dto::customer::StreetAddressDto,
            crate::api::dto::customer::TelephoneNumberDto,
            crate::api::dto::customer::ElectronicAddressDto,
            crate::api::dto::customer::AccountNotificationDto,
            // OAuth
            SubscriptionDto,
            AuthorizationDto,
            ApplicationInformationDto,
            crate::api::dto::oauth::PeriodDto,
            // Health
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service availability and metrics endpoints."),
        (name = "Usage", description = "Green Button usage resources served as Atom XML (`application/atom+xml`): usage points, meter readings, interval blocks, reading types, power quality summaries and usage summaries. Lists are Atom feeds, single resources Atom entries."),
        (name = "Customer", description = "Retail customers and their billing accounts, served as JSON in the standard envelope."),
        (name = "OAuth", description = "Third-party access records: subscriptions, authorizations and application registrations, served as JSON. Client secrets are never projected."),
    ),
    info(
        title = "ESPI Data Custodian API",
        version = "1.0.0",
        description = "Read-only NAESB ESPI (Green Button) resource server.

## Resource families

- **Usage family** — Atom XML under `/espi/1_1/resource/{UsagePoint,MeterReading,IntervalBlock,ReadingType,ElectricPowerQualitySummary,UsageSummary}`
- **Customer/OAuth family** — JSON under `/espi/1_1/resource/{RetailCustomer,CustomerAccount,Subscription,Authorization,ApplicationInformation}`

## Response format

JSON responses use the standard wrapper:
```json
{\"success\": true, \"data\": {...}, \"error\": null}
```

Lists always answer 200, possibly empty. Single-resource requests answer
200 or 404 naming the resource type and requested id.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>, metrics_handle: PrometheusHandle) -> Router {
    let state = ApiState {
        repos,
        metrics: metrics_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // A single router for every /espi/1_1/resource/* route so matchit
    // sees all parametric segments in one tree.
    let resource_routes = Router::new()
        // --- Usage family (Atom XML) ---
        .route("/UsagePoint", get(usage::list_usage_points))
        .route("/UsagePoint/{id}", get(usage::get_usage_point))
        .route("/MeterReading", get(usage::list_meter_readings))
        .route("/MeterReading/{id}", get(usage::get_meter_reading))
        .route("/IntervalBlock", get(usage::list_interval_blocks))
        .route("/IntervalBlock/{id}", get(usage::get_interval_block))
        .route("/ReadingType", get(usage::list_reading_types))
        .route("/ReadingType/{id}", get(usage::get_reading_type))
        .route(
            "/ElectricPowerQualitySummary",
            get(usage::list_power_quality_summaries),
        )
        .route(
            "/ElectricPowerQualitySummary/{id}",
            get(usage::get_power_quality_summary),
        )
        .route("/UsageSummary", get(usage::list_usage_summaries))
        .route("/UsageSummary/{id}", get(usage::get_usage_summary))
        // --- Customer family (JSON) ---
        .route("/RetailCustomer", get(customer::list_retail_customers))
        .route("/RetailCustomer/{id}", get(customer::get_retail_customer))
        .route("/CustomerAccount", get(customer::list_customer_accounts))
        .route("/CustomerAccount/{id}", get(customer::get_customer_account))
        // --- OAuth family (JSON) ---
        .route("/Subscription", get(oauth::list_subscriptions))
        .route("/Subscription/{id}", get(oauth::get_subscription))
        .route("/Authorization", get(oauth::list_authorizations))
        .route("/Authorization/{id}", get(oauth::get_authorization))
        .route(
            "/ApplicationInformation",
            get(oauth::list_application_information),
        )
        .route(
            "/ApplicationInformation/{id}",
            get(oauth::get_application_information),
        );

    let swagger_routes =
        SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health + metrics
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::metrics_handler))
        // ESPI resources
        .nest("/espi/1_1/resource", resource_routes)
        .with_state(state)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
