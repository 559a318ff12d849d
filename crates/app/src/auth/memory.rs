//! In-process identity provider for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::{
    errors::IdentityError,
    identity::IdentityProvider,
    models::{Identity, Password, SignedIn, UserId},
    token::{SALT_BYTES, generate_salt, generate_session_token, hash_password, is_session_token},
};

#[derive(Debug, Clone)]
struct Account {
    user_id: UserId,
    salt: [u8; SALT_BYTES],
    password_hash: String,
}

/// Accounts and sessions kept in memory; everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryIdentityProvider {
    accounts: RwLock<HashMap<String, Account>>,
    sessions: RwLock<HashMap<String, Identity>>,
}

impl MemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn open_session(&self, identity: Identity) -> SignedIn {
        let token = generate_session_token();

        self.sessions
            .write()
            .await
            .insert(token.clone(), identity.clone());

        SignedIn { identity, token }
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentityProvider {
    async fn sign_up(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError> {
        let salt = generate_salt();
        let account = Account {
            user_id: UserId::new(Uuid::now_v7().simple().to_string()),
            salt,
            password_hash: hash_password(&salt, password),
        };

        let user_id = account.user_id.clone();

        {
            let mut accounts = self.accounts.write().await;

            if accounts.contains_key(email) {
                return Err(IdentityError::EmailExists);
            }

            accounts.insert(email.to_string(), account);
        }

        Ok(self
            .open_session(Identity {
                user_id,
                email: email.to_string(),
            })
            .await)
    }

    async fn sign_in(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError> {
        let account = self
            .accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(IdentityError::InvalidCredentials)?;

        if hash_password(&account.salt, password) != account.password_hash {
            return Err(IdentityError::InvalidCredentials);
        }

        Ok(self
            .open_session(Identity {
                user_id: account.user_id,
                email: email.to_string(),
            })
            .await)
    }

    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        if !is_session_token(token) {
            return Err(IdentityError::InvalidToken);
        }

        self.sessions
            .read()
            .await
            .get(token)
            .cloned()
            .ok_or(IdentityError::InvalidToken)
    }

    async fn sign_out(&self, token: &str) -> Result<(), IdentityError> {
        self.sessions.write().await.remove(token);

        Ok(())
    }
}
