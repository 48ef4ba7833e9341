use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::{customer_service, dto::CustomerDto};

use crate::{errors::ApiError, extract::ApiJson, routes::ServerState};

#[utoipa::path(get, path = "/api/v1/customers", tag = "customers", responses((status = 200, description = "List OK")))]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<models::customer::Model>>, ApiError> {
    let customers = customer_service::get_customers(&state.db).await?;
    info!(count = customers.len(), "list customers");
    Ok(Json(customers))
}

#[utoipa::path(get, path = "/api/v1/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<models::customer::Model>, ApiError> {
    let found = customer_service::get_customer_by_id(&state.db, customer_id).await?;
    Ok(Json(found))
}

#[utoipa::path(post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error")))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<CustomerDto>,
) -> Result<(StatusCode, Json<models::customer::Model>), ApiError> {
    input.validate()?;
    let created = customer_service::create_customer(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/api/v1/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
    ApiJson(input): ApiJson<CustomerDto>,
) -> Result<Json<models::customer::Model>, ApiError> {
    input.validate()?;
    let updated = customer_service::edit_customer(&state.db, customer_id, &input).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/v1/customers/{customer_id}", tag = "customers",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    customer_service::delete_customer(&state.db, customer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
