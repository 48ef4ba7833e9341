use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct CustomerRequest {
    pub name: String,
}

#[derive(ToSchema)]
pub struct CartRequest {
    pub name: Option<String>,
}

#[derive(ToSchema)]
pub struct CartProductRequest {
    pub amount: i32,
    pub product_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::create,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::carts::list,
        crate::routes::carts::get,
        crate::routes::carts::create,
        crate::routes::carts::update,
        crate::routes::carts::delete,
        crate::routes::cart_products::list,
        crate::routes::cart_products::get,
        crate::routes::cart_products::create,
        crate::routes::cart_products::update,
        crate::routes::cart_products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerRequest,
            CartRequest,
            CartProductRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "carts"),
        (name = "cart-products")
    )
)]
pub struct ApiDoc;
