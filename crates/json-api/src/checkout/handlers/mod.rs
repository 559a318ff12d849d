//! Checkout Handlers

pub(crate) mod clients;
pub(crate) mod get;
pub(crate) mod start;
pub(crate) mod submit;
