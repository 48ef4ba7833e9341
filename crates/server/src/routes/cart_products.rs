use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::{cart_product_service, dto::CartProductDto};

use crate::{errors::ApiError, extract::ApiJson, routes::ServerState};

#[utoipa::path(get, path = "/api/v1/customers/{customer_id}/carts/{cart_id}/products", tag = "cart-products",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id")),
    responses((status = 200, description = "List OK (empty when the cart cannot be resolved)")))]
pub async fn list(
    State(state): State<ServerState>,
    Path((customer_id, cart_id)): Path<(i32, i32)>,
) -> Result<Json<Vec<models::cart_product::Model>>, ApiError> {
    let items = cart_product_service::get_cart_products(&state.db, customer_id, cart_id).await?;
    info!(customer_id, cart_id, count = items.len(), "list cart products");
    Ok(Json(items))
}

#[utoipa::path(get, path = "/api/v1/customers/{customer_id}/carts/{cart_id}/products/{cart_product_id}", tag = "cart-products",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id"), ("cart_product_id" = i32, Path, description = "Cart product id")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(
    State(state): State<ServerState>,
    Path((customer_id, cart_id, cart_product_id)): Path<(i32, i32, i32)>,
) -> Result<Json<models::cart_product::Model>, ApiError> {
    let item =
        cart_product_service::get_cart_product_by_id(&state.db, customer_id, cart_id, cart_product_id)
            .await?;
    Ok(Json(item))
}

#[utoipa::path(post, path = "/api/v1/customers/{customer_id}/carts/{cart_id}/products", tag = "cart-products",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id")),
    request_body = crate::openapi::CartProductRequest,
    responses((status = 201, description = "Created"), (status = 400, description = "Amount Out Of Range"), (status = 404, description = "Not Found")))]
pub async fn create(
    State(state): State<ServerState>,
    Path((customer_id, cart_id)): Path<(i32, i32)>,
    ApiJson(input): ApiJson<CartProductDto>,
) -> Result<(StatusCode, Json<models::cart_product::Model>), ApiError> {
    let created =
        cart_product_service::add_cart_product_to_cart(&state.db, customer_id, cart_id, &input)
            .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(patch, path = "/api/v1/customers/{customer_id}/carts/{cart_id}/products/{cart_product_id}", tag = "cart-products",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id"), ("cart_product_id" = i32, Path, description = "Cart product id")),
    request_body = crate::openapi::CartProductRequest,
    responses((status = 200, description = "Updated"), (status = 400, description = "Amount Out Of Range"), (status = 404, description = "Not Found")))]
pub async fn update(
    State(state): State<ServerState>,
    Path((customer_id, cart_id, cart_product_id)): Path<(i32, i32, i32)>,
    ApiJson(input): ApiJson<CartProductDto>,
) -> Result<Json<models::cart_product::Model>, ApiError> {
    let updated = cart_product_service::edit_cart_product(
        &state.db,
        customer_id,
        cart_id,
        cart_product_id,
        &input,
    )
    .await?;
    Ok(Json(updated))
}

#[utoipa::path(delete, path = "/api/v1/customers/{customer_id}/carts/{cart_id}/products/{cart_product_id}", tag = "cart-products",
    params(("customer_id" = i32, Path, description = "Customer id"), ("cart_id" = i32, Path, description = "Cart id"), ("cart_product_id" = i32, Path, description = "Cart product id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Path((customer_id, cart_id, cart_product_id)): Path<(i32, i32, i32)>,
) -> Result<StatusCode, ApiError> {
    cart_product_service::delete_cart_product(&state.db, customer_id, cart_id, cart_product_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
