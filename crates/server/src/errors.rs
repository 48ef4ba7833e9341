use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::ServiceError;

/// Boundary mapping of tagged service errors: not-found family to 404,
/// amount/validation family to 400, persistence faults to 500. Body shape is
/// always `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::CustomerNotFound
            | ServiceError::CartNotFound
            | ServiceError::ProductNotFound
            | ServiceError::ProductInCartNotFound => StatusCode::NOT_FOUND,
            ServiceError::AmountEqualOrLowerThanZero
            | ServiceError::AmountGreaterThanStock
            | ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(error = %self.0, "persistence failure surfaced at boundary");
        }
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}
