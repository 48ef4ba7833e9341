//! Boundary data-transfer shapes carried from the request layer into services.
//! Field-level checks live here; everything stock-related stays in the
//! services because it needs the current product row.

use serde::Deserialize;

use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDto {
    pub name: String,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), ServiceError> {
        models::customer::validate_name(&self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartDto {
    #[serde(default)]
    pub name: Option<String>,
}

impl CartDto {
    /// Absent name is fine; a present-but-blank one is rejected.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ServiceError::Validation("name must not be blank".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CartProductDto {
    pub amount: i32,
    pub product_id: i32,
}
