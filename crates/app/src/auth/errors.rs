//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::MIN_PASSWORD_LEN,
    store::{RecordError, StoreError},
};

/// Errors raised by an identity provider.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("an account already exists for this email")]
    EmailExists,

    #[error("email or password is incorrect")]
    InvalidCredentials,

    #[error("session token is invalid or expired")]
    InvalidToken,

    #[error("password rejected by the identity service")]
    WeakPassword,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The identity service returned a non-2xx response or unexpected body.
    #[error("unexpected response from identity service: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("email address is invalid")]
    InvalidEmail,

    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("an account already exists for this email")]
    EmailTaken,

    #[error("email or password is incorrect")]
    InvalidCredentials,

    #[error("session token is invalid or expired")]
    InvalidToken,

    #[error("user has no profile")]
    MissingProfile,

    #[error("identity service error")]
    Identity(#[source] IdentityError),

    #[error("stored profile is malformed")]
    Malformed(#[from] RecordError),

    #[error("storage error")]
    Store(#[from] StoreError),
}

impl From<IdentityError> for AuthServiceError {
    fn from(error: IdentityError) -> Self {
        match error {
            IdentityError::EmailExists => Self::EmailTaken,
            IdentityError::InvalidCredentials => Self::InvalidCredentials,
            IdentityError::InvalidToken => Self::InvalidToken,
            IdentityError::WeakPassword => Self::WeakPassword {
                min: MIN_PASSWORD_LEN,
            },
            other => Self::Identity(other),
        }
    }
}
