use thiserror::Error;

use crate::item::ItemId;
use crate::service::ValidationError;
use crate::store::StorageError;

/// Error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request was malformed; the message names the field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No item with this id exists.
    #[error("Item not found")]
    NotFound(ItemId),

    /// The document could not be read, parsed or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 400,
            CatalogError::NotFound(_) => 404,
            CatalogError::Storage(_) => 500,
        }
    }

    /// Message safe to return to a client. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CatalogError::Storage(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
