//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    auth::{
        AuthServiceError, MIN_PASSWORD_LEN,
        identity::IdentityProvider,
        models::{Identity, Password, Principal, Role, Session},
    },
    store::{DocumentStore, record},
};

const USERS: &str = "Users";

/// Profile document stored at `Users/{uid}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    email: String,
    role: Role,
}

pub struct StoreAuthService {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn DocumentStore>,
}

impl StoreAuthService {
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        Self { identity, store }
    }

    async fn principal(&self, identity: Identity) -> Result<Principal, AuthServiceError> {
        let document = self
            .store
            .get(USERS, identity.user_id.as_str())
            .await?
            .ok_or(AuthServiceError::MissingProfile)?;

        let profile: UserRecord = record::decode(USERS, &document)?;

        Ok(Principal {
            user_id: identity.user_id,
            email: profile.email,
            role: profile.role,
        })
    }
}

fn normalize_email(email: &str) -> Result<String, AuthServiceError> {
    let email = email.trim().to_lowercase();

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AuthServiceError::InvalidEmail),
    }
}

#[async_trait]
impl AuthService for StoreAuthService {
    async fn register(
        &self,
        email: &str,
        password: Password,
        role: Role,
    ) -> Result<Session, AuthServiceError> {
        let email = normalize_email(email)?;

        if password.expose().chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthServiceError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }

        let signed_in = self.identity.sign_up(&email, &password).await?;
        let user_id = signed_in.identity.user_id;

        let profile = record::encode(&UserRecord {
            email: email.clone(),
            role,
        })?;

        self.store.set(USERS, user_id.as_str(), profile).await?;

        info!(user = %user_id, %role, "registered user");

        Ok(Session {
            token: signed_in.token,
            principal: Principal {
                user_id,
                email,
                role,
            },
        })
    }

    async fn login(&self, email: &str, password: Password) -> Result<Session, AuthServiceError> {
        let email = normalize_email(email)?;

        let signed_in = self.identity.sign_in(&email, &password).await?;
        let principal = self.principal(signed_in.identity).await?;

        Ok(Session {
            token: signed_in.token,
            principal,
        })
    }

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError> {
        Ok(self.identity.sign_out(bearer_token).await?)
    }

    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let identity = self.identity.verify(bearer_token).await?;

        self.principal(identity).await
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account with `role` and signs it in.
    async fn register(
        &self,
        email: &str,
        password: Password,
        role: Role,
    ) -> Result<Session, AuthServiceError>;

    async fn login(&self, email: &str, password: Password) -> Result<Session, AuthServiceError>;

    async fn logout(&self, bearer_token: &str) -> Result<(), AuthServiceError>;

    /// Resolves the user and role behind a bearer token.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        auth::{errors::IdentityError, identity::MockIdentityProvider, memory::MemoryIdentityProvider},
        store::MemoryDocumentStore,
    };

    fn service() -> (Arc<MemoryDocumentStore>, StoreAuthService) {
        let store = Arc::new(MemoryDocumentStore::new());

        (
            store.clone(),
            StoreAuthService::new(Arc::new(MemoryIdentityProvider::new()), store),
        )
    }

    #[tokio::test]
    async fn register_writes_the_profile_and_returns_a_session() -> TestResult {
        let (store, auth) = service();

        let session = auth
            .register(" Ana@Example.com ", Password::new("secret1"), Role::Admin)
            .await?;

        assert_eq!(session.principal.email, "ana@example.com");
        assert_eq!(session.principal.role, Role::Admin);

        let profile = store
            .get("Users", session.principal.user_id.as_str())
            .await?
            .map(|document| document.data);

        assert_eq!(
            profile,
            Some(serde_json::json!({ "email": "ana@example.com", "role": "admin" }))
        );

        Ok(())
    }

    #[tokio::test]
    async fn login_and_authenticate_resolve_the_role() -> TestResult {
        let (_, auth) = service();

        auth.register("ana@example.com", Password::new("secret1"), Role::User)
            .await?;

        let session = auth
            .login("ana@example.com", Password::new("secret1"))
            .await?;
        let principal = auth.authenticate_bearer(&session.token).await?;

        assert_eq!(principal, session.principal);
        assert_eq!(principal.role, Role::User);

        Ok(())
    }

    #[tokio::test]
    async fn invalid_emails_and_short_passwords_are_rejected() {
        let (_, auth) = service();

        let no_at = auth
            .register("ana.example.com", Password::new("secret1"), Role::User)
            .await;
        let short = auth
            .register("ana@example.com", Password::new("12345"), Role::User)
            .await;

        assert!(matches!(no_at, Err(AuthServiceError::InvalidEmail)));
        assert!(matches!(
            short,
            Err(AuthServiceError::WeakPassword { min: 6 })
        ));
    }

    #[tokio::test]
    async fn duplicate_registration_is_reported_as_taken() -> TestResult {
        let (_, auth) = service();

        auth.register("ana@example.com", Password::new("secret1"), Role::User)
            .await?;

        let result = auth
            .register("ana@example.com", Password::new("secret1"), Role::User)
            .await;

        assert!(matches!(result, Err(AuthServiceError::EmailTaken)));

        Ok(())
    }

    #[tokio::test]
    async fn logout_invalidates_the_token() -> TestResult {
        let (_, auth) = service();

        let session = auth
            .register("ana@example.com", Password::new("secret1"), Role::User)
            .await?;

        auth.logout(&session.token).await?;

        let result = auth.authenticate_bearer(&session.token).await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));

        Ok(())
    }

    #[tokio::test]
    async fn identities_without_a_profile_cannot_log_in() -> TestResult {
        let mut identity = MockIdentityProvider::new();

        identity.expect_verify().returning(|_| {
            Ok(Identity {
                user_id: "ghost".into(),
                email: "ghost@example.com".to_string(),
            })
        });

        let auth = StoreAuthService::new(Arc::new(identity), Arc::new(MemoryDocumentStore::new()));

        let result = auth.authenticate_bearer("token").await;

        assert!(matches!(result, Err(AuthServiceError::MissingProfile)));

        Ok(())
    }

    #[tokio::test]
    async fn identity_outages_are_not_mistaken_for_bad_credentials() {
        let mut identity = MockIdentityProvider::new();

        identity
            .expect_sign_in()
            .returning(|_, _| Err(IdentityError::UnexpectedResponse("503".to_string())));

        let auth = StoreAuthService::new(Arc::new(identity), Arc::new(MemoryDocumentStore::new()));

        let result = auth
            .login("ana@example.com", Password::new("secret1"))
            .await;

        assert!(matches!(result, Err(AuthServiceError::Identity(_))));
    }
}
