//! Menu service errors.

use thiserror::Error;

use crate::store::{RecordError, StoreError};

#[derive(Debug, Error)]
pub enum MenuServiceError {
    #[error("product not found")]
    NotFound,

    #[error("invalid data: {0}")]
    InvalidData(&'static str),

    #[error("stored product is malformed")]
    Malformed(#[from] RecordError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
