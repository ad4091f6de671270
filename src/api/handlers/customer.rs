//! Customer-family handlers: JSON collections and items

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::dto::{ApiResponse, CustomerAccountDto, RetailCustomerDto};
use crate::api::error::RestError;
use crate::api::router::ApiState;
use crate::domain::customer_account::RESOURCE as CUSTOMER_ACCOUNT;
use crate::domain::retail_customer::RESOURCE as RETAIL_CUSTOMER;
use crate::domain::DomainError;

/// List retail customers
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/RetailCustomer",
    tag = "Customer",
    responses(
        (status = 200, description = "Every retail customer", body = ApiResponse<Vec<RetailCustomerDto>>)
    )
)]
pub async fn list_retail_customers(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<RetailCustomerDto>>>, RestError> {
    let customers = state.repos.retail_customers().find_all().await?;
    let items = customers.iter().map(RetailCustomerDto::from_domain).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get one retail customer
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/RetailCustomer/{id}",
    tag = "Customer",
    params(("id" = Uuid, Path, description = "Retail customer id")),
    responses(
        (status = 200, description = "The retail customer", body = ApiResponse<RetailCustomerDto>),
        (status = 404, description = "No retail customer with this id")
    )
)]
pub async fn get_retail_customer(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RetailCustomerDto>>, RestError> {
    let customer = state
        .repos
        .retail_customers()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(RETAIL_CUSTOMER, id))?;
    Ok(Json(ApiResponse::success(RetailCustomerDto::from_domain(
        &customer,
    ))))
}

/// List customer accounts
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/CustomerAccount",
    tag = "Customer",
    responses(
        (status = 200, description = "Every customer account", body = ApiResponse<Vec<CustomerAccountDto>>)
    )
)]
pub async fn list_customer_accounts(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<CustomerAccountDto>>>, RestError> {
    let accounts = state.repos.customer_accounts().find_all().await?;
    let items = accounts.iter().map(CustomerAccountDto::from_domain).collect();
    Ok(Json(ApiResponse::success(items)))
}

/// Get one customer account
#[utoipa::path(
    get,
    path = "/espi/1_1/resource/CustomerAccount/{id}",
    tag = "Customer",
    params(("id" = Uuid, Path, description = "Customer account id")),
    responses(
        (status = 200, description = "The customer account with its organisation and notifications", body = ApiResponse<CustomerAccountDto>),
        (status = 404, description = "No customer account with this id")
    )
)]
pub async fn get_customer_account(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CustomerAccountDto>>, RestError> {
    let account = state
        .repos
        .customer_accounts()
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(CUSTOMER_ACCOUNT, id))?;
    Ok(Json(ApiResponse::success(CustomerAccountDto::from_domain(
        &account,
    ))))
}
