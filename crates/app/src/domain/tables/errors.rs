//! Tables service errors.

use thiserror::Error;

use crate::store::{RecordError, StoreError};

#[derive(Debug, Error)]
pub enum TablesServiceError {
    #[error("table not found")]
    NotFound,

    #[error("table number must be at least 1")]
    InvalidTableNumber,

    #[error("stored table is malformed")]
    Malformed(#[from] RecordError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
