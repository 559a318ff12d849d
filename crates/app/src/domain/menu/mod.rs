//! Menu

pub mod errors;
pub mod models;
pub(crate) mod records;
mod repository;
pub mod service;

pub use errors::MenuServiceError;
pub use service::*;
