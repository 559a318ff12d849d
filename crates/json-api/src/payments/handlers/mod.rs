//! Payment Handlers

pub(crate) mod intents;
