//! Carts service errors.

use thiserror::Error;

use crate::domain::{carts::storage::CartStorageError, menu::MenuServiceError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product not found")]
    ProductNotFound,

    #[error("product is not available")]
    ProductUnavailable,

    #[error("menu lookup failed")]
    Menu(#[source] MenuServiceError),

    #[error("cart storage failed")]
    Storage(#[from] CartStorageError),

    #[error("cart could not be serialized")]
    Encode(#[source] serde_json::Error),
}

impl From<MenuServiceError> for CartsServiceError {
    fn from(error: MenuServiceError) -> Self {
        match error {
            MenuServiceError::NotFound => Self::ProductNotFound,
            other => Self::Menu(other),
        }
    }
}
