//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Surfaces every recoverable condition as a tagged `ServiceError` value.

pub mod errors;
pub mod dto;
pub mod customer_service;
pub mod shopping_cart_service;
pub mod cart_product_service;
#[cfg(test)]
pub mod test_support;
