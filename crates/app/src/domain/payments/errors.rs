//! Payments service errors.

use thiserror::Error;

use crate::store::{RecordError, StoreError};

#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    #[error("stored payment is malformed")]
    Malformed(#[from] RecordError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
