//! Identity provider boundary.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{
    errors::IdentityError,
    models::{Identity, Password, SignedIn},
};

/// Hosted service that owns credentials and session tokens.
#[automock]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and open a session for it.
    async fn sign_up(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError>;

    /// Open a session for an existing account.
    async fn sign_in(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError>;

    /// Resolve the account behind a session token.
    async fn verify(&self, token: &str) -> Result<Identity, IdentityError>;

    /// End a session.
    async fn sign_out(&self, token: &str) -> Result<(), IdentityError>;
}
