//! Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::auth::Password;

use crate::{
    auth::{errors::into_status_error, models::SessionResponse},
    extensions::*,
    state::State,
};

/// Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login Handler
#[endpoint(
    tags("auth"),
    summary = "Login",
    responses(
        (status_code = StatusCode::OK, description = "Signed in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Email or password is incorrect"),
        (status_code = StatusCode::FORBIDDEN, description = "Account has no profile"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<SessionResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let session = state
        .app
        .auth
        .login(&request.email, Password::new(request.password))
        .await
        .map_err(into_status_error)?;

    Ok(Json(session.into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::auth::{AuthServiceError, MockAuthService, Session};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, user_principal};

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        TestServices {
            auth,
            ..TestServices::default()
        }
        .into_service(None, Router::with_path("auth/login").post(handler))
    }

    #[tokio::test]
    async fn test_login_returns_session() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .withf(|email, password| email == "ana@example.com" && password.expose() == "secret1")
            .return_once(|_, _| {
                Ok(Session {
                    token: "ms_token".to_string(),
                    principal: user_principal(),
                })
            });

        let mut res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "ana@example.com", "password": "secret1" }))
            .send(&make_service(auth))
            .await;

        let body: SessionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.user_id, user_principal().user_id.to_string());

        Ok(())
    }

    #[tokio::test]
    async fn test_bad_credentials_return_401() {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::InvalidCredentials));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "ana@example.com", "password": "nope" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_missing_profile_returns_403() {
        let mut auth = MockAuthService::new();

        auth.expect_login()
            .once()
            .return_once(|_, _| Err(AuthServiceError::MissingProfile));

        let res = TestClient::post("http://example.com/auth/login")
            .json(&json!({ "email": "ana@example.com", "password": "secret1" }))
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));
    }
}
