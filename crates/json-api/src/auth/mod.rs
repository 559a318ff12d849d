//! Authentication

pub(crate) mod errors;
pub(crate) mod gate;
pub(crate) mod handlers;
pub(crate) mod middleware;
mod models;

pub(crate) use handlers::*;
