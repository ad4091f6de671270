//! OAuth-family handlers: subscriptions, authorizations and application
//! registrations as JSON

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::dto::{
    ApiResponse, ApplicationInformationDto, AuthorizationDto, SubscriptionDto,
};
use crate::api::error::RestError;
use crate::api::router::ApiState;
use crate::domain::application_information::RESOURCE as APPLICATION_INFORMATION;
use crate::domain::authorization::RESOURCE as AUTHORIZATION;
use crate::domain::subscription::RESOURCE as SUBSCRIPTION;
use crate::domain::DomainError;

/// List subscriptions
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/Subscription",
    tag = "OAuth",
    responses(
        (status = 200, description = "Every subscription", body = ApiResponse<Vec<SubscriptionDto>>)
    )
)]
pub async fn list_subscriptions(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<SubscriptionDto>>>, RestError> {
    let subscriptions = state.repos.subscriptions().find_all().await?;
    let items = subscriptions.iter().map(SubscriptionDto::from_domain).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get one subscription
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/Subscription/{id}",
    tag = "OAuth",
    params(("id" = Uuid, Path, description = "Subscription id")),
    responses(
        (status = 200, description = "The subscription", body = ApiResponse<SubscriptionDto>),
        (status = 404, description = "No subscription with this id")
    )
)]
pub async fn get_subscription(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SubscriptionDto>>, RestError> {
    let subscription = state
        .repos
        .subscriptions()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(SUBSCRIPTION, id))?;
    Ok(Json(ApiResponse::success(SubscriptionDto::from_domain(
        &subscription,
    ))))
}

/// List authorizations
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/Authorization",
    tag = "OAuth",
    responses(
        (status = 200, description = "Every authorization", body = ApiResponse<Vec<AuthorizationDto>>)
    )
)]
pub async fn list_authorizations(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<AuthorizationDto>>>, RestError> {
    let authorizations = state.repos.authorizations().find_all().await?;
    let items = authorizations.iter().map(AuthorizationDto::from_domain).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get one authorization
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/Authorization/{id}",
    tag = "OAuth",
    params(("id" = Uuid, Path, description = "Authorization id")),
    responses(
        (status = 200, description = "The authorization", body = ApiResponse<AuthorizationDto>),
        (status = 404, description = "No authorization with this id")
    )
)]
pub async fn get_authorization(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AuthorizationDto>>, RestError> {
    let authorization = state
        .repos
        .authorizations()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(AUTHORIZATION, id))?;
    Ok(Json(ApiResponse::success(AuthorizationDto::from_domain(
        &authorization,
    ))))
}

/// List application registrations
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ApplicationInformation",
    tag = "OAuth",
    responses(
        (status = 200, description = "Every registered application", body = ApiResponse<Vec<ApplicationInformationDto>>)
    )
)]
pub async fn list_application_information(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<ApplicationInformationDto>>>, RestError> {
    let registrations = state.repos.application_information().find_all().await?;
    let items = registrations
        .iter()
        .map(ApplicationInformationDto::from_domain)
        .collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get one application registration
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/ApplicationInformation/{id}",
    tag = "OAuth",
    params(("id" = Uuid, Path, description = "Application registration id")),
    responses(
        (status = 200, description = "The application registration", body = ApiResponse<ApplicationInformationDto>),
        (status = 404, description = "No application registration with this id")
    )
)]
pub async fn get_application_information(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ApplicationInformationDto>>, RestError> {
    let registration = state
        .repos
        .application_information()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(APPLICATION_INFORMATION, id))?;
    Ok(Json(ApiResponse::success(
        ApplicationInformationDto::from_domain(&registration),
    )))
}
