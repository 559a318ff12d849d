//! Checkout
//!
//! Splitting a cart's bill across several payers and confirming it as one
//! order with one payment per payer.

pub mod errors;
pub mod flow;
pub mod formatting;
pub mod models;
pub mod service;

pub use errors::{CheckoutError, CheckoutServiceError};
pub use flow::CheckoutFlow;
pub use service::*;
