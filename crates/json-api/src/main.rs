//! Mesa JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use mesa_app::{
    auth::{IdentityProvider, IdentityToolkitClient, IdentityToolkitConfig, MemoryIdentityProvider},
    context::AppContext,
    domain::{
        carts::FileCartStorage,
        payments::{PaymentIntentsService, StripeClient},
    },
    store::{DocumentStore, MemoryDocumentStore, RestDocumentStore},
};

use crate::{
    config::{
        ServerConfig,
        store::{StoreBackend, StoreConfigError},
    },
    state::State,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod cart;
mod checkout;
mod config;
mod extensions;
mod healthcheck;
mod menu;
mod observability;
mod orders;
mod payments;
mod router;
mod shutdown;
mod state;
mod tables;
#[cfg(test)]
mod test_helpers;

fn document_store(config: &ServerConfig) -> Result<Arc<dyn DocumentStore>, StoreConfigError> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("using in-memory document store");

            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Rest => {
            let rest = config.store.rest_config()?;

            info!(base_url = %rest.base_url, "using hosted document store");

            Ok(Arc::new(RestDocumentStore::new(rest)))
        }
    }
}

fn identity_provider(config: &ServerConfig) -> Arc<dyn IdentityProvider> {
    match &config.auth.identity_api_key {
        Some(api_key) => Arc::new(IdentityToolkitClient::new(IdentityToolkitConfig {
            api_base: config.auth.identity_api_base.clone(),
            api_key: api_key.clone(),
        })),
        None => {
            info!("IDENTITY_API_KEY unset, accounts are kept in memory");

            Arc::new(MemoryIdentityProvider::new())
        }
    }
}

/// Mesa JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Observability error: {init_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let store = match document_store(&config) {
        Ok(store) => store,
        Err(config_error) => {
            error!("invalid store configuration: {config_error}");

            process::exit(1);
        }
    };

    let payment_intents = config.payments.stripe_config().map(|stripe| {
        Arc::new(StripeClient::new(stripe)) as Arc<dyn PaymentIntentsService>
    });

    if payment_intents.is_none() {
        info!("STRIPE_SECRET_KEY unset, payment intents are disabled");
    }

    let app = AppContext::new(
        Arc::clone(&store),
        identity_provider(&config),
        Arc::new(FileCartStorage::new(config.carts.carts_dir.clone())),
        payment_intents,
    );

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::shared(
            app,
            store,
            config.auth.allow_admin_signup,
        )))
        .push(router::app_router());

    let doc = OpenApi::new("Mesa API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();
    let grace = config.server.shutdown_grace();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;
}
