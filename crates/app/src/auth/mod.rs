//! Authentication

mod errors;
pub mod identity;
pub mod identity_toolkit;
pub mod memory;
pub mod models;
mod service;
mod token;

pub use errors::*;
pub use identity::{IdentityProvider, MockIdentityProvider};
pub use identity_toolkit::{IdentityToolkitClient, IdentityToolkitConfig};
pub use memory::MemoryIdentityProvider;
pub use models::{Password, Principal, Role, Session, UserId};
pub use service::*;

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;
