//! Logout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{auth::errors::into_status_error, extensions::*, state::State};

/// Logout Handler
///
/// Ends the session behind the bearer token.
#[endpoint(
    tags("auth"),
    summary = "Logout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Signed out"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let token = depot.bearer_token_or_401()?;

    state
        .app
        .auth
        .logout(token)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use mesa_app::auth::MockAuthService;
    use salvo::{http::header::AUTHORIZATION, test::TestClient};

    use crate::{
        auth::middleware,
        test_helpers::{TestServices, user_principal},
    };

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        TestServices {
            auth,
            ..TestServices::default()
        }
        .into_service(
            None,
            Router::with_path("auth/logout")
                .hoop(middleware::handler)
                .post(handler),
        )
    }

    #[tokio::test]
    async fn test_logout_ends_the_session() {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Ok(user_principal()));
        auth.expect_logout()
            .once()
            .withf(|token| token == "ms_token")
            .return_once(|_| Ok(()));

        let res = TestClient::post("http://example.com/auth/logout")
            .add_header(AUTHORIZATION, "Bearer ms_token", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn test_logout_without_token_returns_401() {
        let mut auth = MockAuthService::new();

        auth.expect_logout().never();

        let res = TestClient::post("http://example.com/auth/logout")
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));
    }
}
