use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::{dto::CartDto, shopping_cart_service};

use crate::{errors::ApiError, extract::ApiJson, routes::ServerState};

#[utoipa::path(get, path = "/api/v1/customers/{customer_id}/carts", tag = "carts",
    params(("customer_id" = i32, Path, description = "Customer id")),
    responses((status = 200, description = "List OK"), (status = 404, description = "Customer Not Found")))]
pub async fn list(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<models::shopping_cart::Model>>, ApiError> {
    let carts = shopping_cart_service::get_shopping_carts(&state.db, customer_id).await?;
    info!(customer_id, count = carts.len(), "list shopping carts");
    Ok(Json(carts))
}

#[utoipa::path(get, path = "/api/v1/customers/{customer_id}/carts/{cart_id}", tag = "carts",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path((customer_id, cart_id)): Path<(i32, i32)>,
) -> Result<Json<models::shopping_cart::Model>, ApiError> {
    let cart = shopping_cart_service::get_shopping_cart_by_id(&state.db, customer_id, cart_id).await?;
    Ok(Json(cart))
}

#[utoipa::path(post, path = "/api/v1/customers/{customer_id}/carts", tag = "carts",
    params(("customer_id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CartRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Validation Error"), (status = 404, description = "Customer Not Found")))]
pub async fn create(
    State(state): State<ServerState>,
    Path(customer_id): Path<i32>,
    ApiJson(input): ApiJson<CartDto>,
) -> Result<(StatusCode, Json<models::shopping_cart::Model>), ApiError> {
    input.validate()?;
    let created = shopping_cart_service::create_shopping_cart(&state.db, customer_id, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/api/v1/customers/{customer_id}/carts/{cart_id}", tag = "carts",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id")),
    request_body = crate::openapi::CartRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Validation Error"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path((customer_id, cart_id)): Path<(i32, i32)>,
    ApiJson(input): ApiJson<CartDto>,
) -> Result<Json<models::shopping_cart::Model>, ApiError> {
    input.validate()?;
    let updated =
        shopping_cart_service::edit_shopping_cart(&state.db, customer_id, cart_id, &input).await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/v1/customers/{customer_id}/carts/{cart_id}", tag = "carts",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path((customer_id, cart_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    shopping_cart_service::delete_shopping_cart(&state.db, customer_id, cart_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
