//! Carts

pub mod errors;
pub mod models;
pub mod service;
pub mod storage;

pub use errors::CartsServiceError;
pub use service::*;
pub use storage::{CartStorage, CartStorageError, FileCartStorage};
