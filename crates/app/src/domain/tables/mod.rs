//! Tables

pub mod errors;
pub mod models;
mod records;
pub mod service;

pub use errors::TablesServiceError;
pub use service::*;
