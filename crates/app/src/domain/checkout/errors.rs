//! Checkout errors.

use thiserror::Error;

use crate::domain::{
    carts::CartsServiceError,
    checkout::models::{CardField, describe_fields},
};

/// Rejections raised by the checkout state machine. None of them write anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,

    #[error("payer {index} does not exist, the bill is split across {payers}")]
    PayerOutOfRange { index: usize, payers: usize },

    #[error("split amounts add up to {actual} but the total is {expected}")]
    SplitMismatch { expected: u64, actual: u64 },

    #[error("payer {payer} is missing card {}", describe_fields(.fields))]
    MissingCardDetails { payer: usize, fields: Vec<CardField> },

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("this checkout has already been completed")]
    AlreadyCompleted,

    #[error("the cart changed since checkout started")]
    CartChanged,
}

#[derive(Debug, Error)]
pub enum CheckoutServiceError {
    #[error("no checkout in progress")]
    NotStarted,

    #[error(transparent)]
    Flow(#[from] CheckoutError),

    #[error("cart unavailable")]
    Cart(#[from] CartsServiceError),

    #[error("payment processing failed")]
    ProcessingFailed,
}
