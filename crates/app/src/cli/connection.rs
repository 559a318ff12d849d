use std::{sync::Arc, time::Duration};

use clap::Args;
use mesa_app::{
    auth::{IdentityProvider, IdentityToolkitClient, IdentityToolkitConfig},
    store::{DocumentStore, RestDocumentStore, RestStoreConfig},
};

#[derive(Debug, Args)]
pub(crate) struct StoreArgs {
    /// Hosted document store base URL
    #[arg(long, env = "STORE_URL")]
    store_url: String,

    /// Hosted document store bearer token
    #[arg(long, env = "STORE_TOKEN", hide_env_values = true)]
    store_token: String,
}

impl StoreArgs {
    pub(crate) fn connect(self) -> Arc<dyn DocumentStore> {
        Arc::new(RestDocumentStore::new(RestStoreConfig {
            base_url: self.store_url,
            token: self.store_token,
            poll_interval: Duration::from_secs(1),
        }))
    }
}

#[derive(Debug, Args)]
pub(crate) struct IdentityArgs {
    /// Identity Toolkit API base URL
    #[arg(
        long,
        env = "IDENTITY_API_BASE",
        default_value = "https://identitytoolkit.googleapis.com"
    )]
    identity_api_base: String,

    /// Identity Toolkit web API key
    #[arg(long, env = "IDENTITY_API_KEY", hide_env_values = true)]
    identity_api_key: String,
}

impl IdentityArgs {
    pub(crate) fn connect(self) -> Arc<dyn IdentityProvider> {
        Arc::new(IdentityToolkitClient::new(IdentityToolkitConfig {
            api_base: self.identity_api_base,
            api_key: self.identity_api_key,
        }))
    }
}
