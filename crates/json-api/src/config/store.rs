//! Document Store Config

use std::time::Duration;

use clap::Args;
use thiserror::Error;

use mesa_app::store::RestStoreConfig;

/// Where documents live.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum StoreBackend {
    /// Process-local store; everything is lost on restart.
    Memory,

    /// Hosted document store over HTTP.
    Rest,
}

#[derive(Debug, Error)]
pub enum StoreConfigError {
    #[error("STORE_URL is required for the rest store backend")]
    MissingUrl,

    #[error("STORE_TOKEN is required for the rest store backend")]
    MissingToken,
}

/// Document store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Store backend (memory, rest)
    #[arg(
        long = "store-backend",
        env = "STORE_BACKEND",
        value_enum,
        default_value_t = StoreBackend::Memory
    )]
    pub backend: StoreBackend,

    /// Hosted document store base URL
    #[arg(long, env = "STORE_URL")]
    pub store_url: Option<String>,

    /// Hosted document store bearer token
    #[arg(long, env = "STORE_TOKEN", hide_env_values = true)]
    pub store_token: Option<String>,

    /// How often live queries poll the hosted store, in milliseconds
    #[arg(long, env = "STORE_POLL_INTERVAL_MS", default_value_t = 2_000_u64)]
    pub store_poll_interval_ms: u64,
}

impl StoreConfig {
    /// Settings for the hosted store client.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL or token is missing.
    pub fn rest_config(&self) -> Result<RestStoreConfig, StoreConfigError> {
        Ok(RestStoreConfig {
            base_url: self.store_url.clone().ok_or(StoreConfigError::MissingUrl)?,
            token: self
                .store_token
                .clone()
                .ok_or(StoreConfigError::MissingToken)?,
            poll_interval: Duration::from_millis(self.store_poll_interval_ms),
        })
    }
}
