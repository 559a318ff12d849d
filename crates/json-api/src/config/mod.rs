//! Server configuration module

use clap::Parser;

use crate::config::{
    auth::AuthConfig, carts::CartsConfig, logging::LoggingConfig, payments::PaymentsConfig,
    server::ServerRuntimeConfig, store::StoreConfig,
};

pub(crate) mod auth;
pub(crate) mod carts;
pub(crate) mod logging;
pub(crate) mod payments;
pub(crate) mod server;
pub(crate) mod store;

/// Mesa JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "mesa-json", about = "Mesa JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Document store settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// Identity service settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Cart persistence settings.
    #[command(flatten)]
    pub carts: CartsConfig,

    /// Payment gateway settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
