//! Validation errors for item creation.

use thiserror::Error;

/// A creation request was rejected. The message names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    Body,

    #[error("Name is required and must be a non-empty string")]
    Name,

    #[error("Category is required and must be a non-empty string")]
    Category,

    #[error("Price must be a number if provided")]
    Price,
}

impl ValidationError {
    /// Name of the field that failed, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Body => None,
            ValidationError::Name => Some("name"),
            ValidationError::Category => Some("category"),
            ValidationError::Price => Some("price"),
        }
    }
}
