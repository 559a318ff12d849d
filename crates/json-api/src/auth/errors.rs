//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidEmail => StatusError::bad_request().brief("Invalid email address"),
        AuthServiceError::WeakPassword { min } => StatusError::bad_request()
            .brief(format!("Password must be at least {min} characters")),
        AuthServiceError::EmailTaken => {
            StatusError::conflict().brief("An account already exists for this email")
        }
        AuthServiceError::InvalidCredentials => {
            StatusError::unauthorized().brief("Email or password is incorrect")
        }
        AuthServiceError::InvalidToken => {
            StatusError::unauthorized().brief("Session is invalid or expired")
        }
        AuthServiceError::MissingProfile => {
            StatusError::forbidden().brief("Account has no profile")
        }
        AuthServiceError::Identity(source) => {
            error!("identity service failed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Malformed(source) => {
            error!("stored user profile is malformed: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Store(source) => {
            error!("failed to read user profile: {source}");

            StatusError::internal_server_error()
        }
    }
}
