//! Checkout

pub(crate) mod errors;
pub(crate) mod handlers;
pub(crate) mod models;
pub(crate) mod payers;

pub(crate) use handlers::*;
