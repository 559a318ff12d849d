//! Identity Toolkit REST client.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::auth::{
    errors::IdentityError,
    identity::IdentityProvider,
    models::{Identity, Password, SignedIn, UserId},
};

/// Configuration for the hosted identity service.
#[derive(Debug, Clone)]
pub struct IdentityToolkitConfig {
    /// API base, e.g. `"https://identitytoolkit.googleapis.com"`.
    pub api_base: String,

    /// Project web API key.
    pub api_key: String,
}

/// [`IdentityProvider`] backed by the Identity Toolkit `accounts:*` endpoints.
#[derive(Debug, Clone)]
pub struct IdentityToolkitClient {
    config: IdentityToolkitConfig,
    http: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,

    #[serde(default)]
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map the service's error codes onto [`IdentityError`].
fn classify(message: &str) -> Option<IdentityError> {
    let code = message.split([' ', ':']).next().unwrap_or_default();

    match code {
        "EMAIL_EXISTS" => Some(IdentityError::EmailExists),
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            Some(IdentityError::InvalidCredentials)
        }
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => {
            Some(IdentityError::InvalidToken)
        }
        "WEAK_PASSWORD" => Some(IdentityError::WeakPassword),
        _ => None,
    }
}

impl IdentityToolkitClient {
    #[must_use]
    pub fn new(config: IdentityToolkitConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn call<B, T>(&self, action: &str, body: &B) -> Result<T, IdentityError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/v1/accounts:{action}",
            self.config.api_base.trim_end_matches('/')
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.config.api_key)])
            .json(body)
            .send()
            .await?;

        Ok(expect_success(response, action).await?.json().await?)
    }
}

async fn expect_success(response: Response, action: &str) -> Result<Response, IdentityError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&text)
        && let Some(error) = classify(&parsed.error.message)
    {
        return Err(error);
    }

    Err(IdentityError::UnexpectedResponse(format!(
        "{action} failed with status {status}: {text}"
    )))
}

impl From<AccountResponse> for SignedIn {
    fn from(account: AccountResponse) -> Self {
        Self {
            identity: Identity {
                user_id: UserId::new(account.local_id),
                email: account.email,
            },
            token: account.id_token,
        }
    }
}

#[async_trait]
impl IdentityProvider for IdentityToolkitClient {
    async fn sign_up(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError> {
        let body = PasswordRequest {
            email,
            password: password.expose(),
            return_secure_token: true,
        };

        let account: AccountResponse = self.call("signUp", &body).await?;

        Ok(account.into())
    }

    async fn sign_in(&self, email: &str, password: &Password) -> Result<SignedIn, IdentityError> {
        let body = PasswordRequest {
            email,
            password: password.expose(),
            return_secure_token: true,
        };

        let account: AccountResponse = self.call("signInWithPassword", &body).await?;

        Ok(account.into())
    }

    async fn verify(&self, token: &str) -> Result<Identity, IdentityError> {
        let lookup: LookupResponse = self
            .call("lookup", &LookupRequest { id_token: token })
            .await?;

        let user = lookup
            .users
            .into_iter()
            .next()
            .ok_or(IdentityError::InvalidToken)?;

        Ok(Identity {
            user_id: UserId::new(user.local_id),
            email: user.email,
        })
    }

    /// ID tokens expire on their own and cannot be revoked individually.
    async fn sign_out(&self, _token: &str) -> Result<(), IdentityError> {
        Ok(())
    }
}
