//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use mesa_app::auth::Principal;

const BEARER_TOKEN_DEPOT_KEY: &str = "bearer_token";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session(&mut self, principal: Principal, bearer_token: &str);

    /// The signed-in caller, if the request carried a valid token.
    fn principal(&self) -> Option<&Principal>;

    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    fn bearer_token_or_401(&self) -> Result<&str, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session(&mut self, principal: Principal, bearer_token: &str) {
        self.inject(principal);
        self.insert(BEARER_TOKEN_DEPOT_KEY, bearer_token.to_string());
    }

    fn principal(&self) -> Option<&Principal> {
        self.obtain::<Principal>().ok()
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.principal()
            .cloned()
            .ok_or_else(|| StatusError::unauthorized().brief("Sign in required"))
    }

    fn bearer_token_or_401(&self) -> Result<&str, StatusError> {
        self.get::<String>(BEARER_TOKEN_DEPOT_KEY)
            .map(String::as_str)
            .map_err(|_ignored| StatusError::unauthorized().brief("Sign in required"))
    }
}
