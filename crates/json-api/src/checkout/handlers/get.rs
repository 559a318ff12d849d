//! Get Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Get Checkout Handler
#[endpoint(tags("checkout"), summary = "Get Checkout", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let flow = state
        .app
        .checkout
        .get_checkout(&principal.user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&flow).into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::checkout::{CheckoutServiceError, MockCheckoutService};
    use salvo::test::TestClient;

    use crate::test_helpers::{TestServices, user_principal};

    use super::*;

    #[tokio::test]
    async fn test_without_checkout_returns_404() {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_get_checkout()
            .once()
            .return_once(|_| Err(CheckoutServiceError::NotStarted));

        let res = TestClient::get("http://example.com/checkout")
            .send(
                &TestServices {
                    checkout,
                    ..TestServices::default()
                }
                .into_service(
                    Some(user_principal()),
                    Router::with_path("checkout").get(handler),
                ),
            )
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
