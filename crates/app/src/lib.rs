//! Shared application domain, hosted-service adapters and checkout logic.

pub mod auth;
pub mod context;
pub mod domain;
pub mod ids;
pub mod money;
pub mod navigation;
pub mod store;

#[cfg(test)]
mod test;
