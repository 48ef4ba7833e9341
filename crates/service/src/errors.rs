use thiserror::Error;

use models::errors::ModelError;

/// Recoverable service-level conditions, surfaced as values so callers can
/// branch on error-vs-success without catching anything. The boundary maps the
/// not-found family to 404 and the amount/validation family to 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Cart not found")]
    CartNotFound,
    #[error("Product not found")]
    ProductNotFound,
    #[error("Product in cart not found")]
    ProductInCartNotFound,
    #[error("Amount must be greater than 0")]
    AmountEqualOrLowerThanZero,
    #[error("Amount must be less than stock")]
    AmountGreaterThanStock,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
