//! Payments

pub mod errors;
pub mod intents;
pub mod models;
mod records;
pub mod service;

pub use errors::PaymentsServiceError;
pub use intents::{
    MockPaymentIntentsService, PaymentIntentsError, PaymentIntentsService, StripeClient,
    StripeConfig,
};
pub use service::*;
