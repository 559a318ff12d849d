//! Orders service errors.

use thiserror::Error;

use crate::{
    domain::orders::models::OrderStatus,
    store::{RecordError, StoreError},
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("stored order is malformed")]
    Malformed(#[from] RecordError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
