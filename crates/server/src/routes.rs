use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

pub mod cart_products;
pub mod carts;
pub mod customers;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, versioned API, Swagger UI.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let api = Router::new()
        .route(
            "/api/v1/customers",
            get(customers::list).post(customers::create),
        )
        .route(
            "/api/v1/customers/:customer_id",
            get(customers::get)
                .patch(customers::update)
                .delete(customers::delete),
        )
        .route(
            "/api/v1/customers/:customer_id/carts",
            get(carts::list).post(carts::create),
        )
        .route(
            "/api/v1/customers/:customer_id/carts/:cart_id",
            get(carts::get).patch(carts::update).delete(carts::delete),
        )
        .route(
            "/api/v1/customers/:customer_id/carts/:cart_id/products",
            get(cart_products::list).post(cart_products::create),
        )
        .route(
            "/api/v1/customers/:customer_id/carts/:cart_id/products/:cart_product_id",
            get(cart_products::get)
                .patch(cart_products::update)
                .delete(cart_products::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi()),
        )
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
