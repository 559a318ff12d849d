//! Start Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Start Checkout Handler
///
/// Snapshots the caller's cart with a single payer covering the total.
/// Any earlier checkout is discarded.
#[endpoint(
    tags("checkout"),
    summary = "Start Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Checkout started"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let flow = state
        .app
        .checkout
        .start_checkout(&principal.user_id)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);
    res.render(Json(CheckoutResponse::from(&flow)));

    Ok(())
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::checkout::{CheckoutError, CheckoutServiceError, MockCheckoutService};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        checkout::models::tests::make_flow,
        test_helpers::{TEST_USER_ID, TestServices, user_principal},
    };

    use super::*;

    fn make_service(checkout: MockCheckoutService) -> Service {
        TestServices {
            checkout,
            ..TestServices::default()
        }
        .into_service(
            Some(user_principal()),
            Router::with_path("checkout").post(handler),
        )
    }

    #[tokio::test]
    async fn test_start_checkout() -> TestResult {
        let flow = make_flow(4_00, 3)?;
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_start_checkout()
            .once()
            .withf(|user| user.as_str() == TEST_USER_ID)
            .return_once(move |_| Ok(flow));

        let mut res = TestClient::post("http://example.com/checkout")
            .send(&make_service(checkout))
            .await;

        let body: CheckoutResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.state, "editing");
        assert_eq!(body.total, 12_00);
        assert_eq!(body.payers.len(), 1);
        assert_eq!(body.payers[0].amount, 12_00);
        assert_eq!(body.payers[0].method, "card");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_returns_400() {
        let mut checkout = MockCheckoutService::new();

        checkout
            .expect_start_checkout()
            .once()
            .return_once(|_| Err(CheckoutServiceError::Flow(CheckoutError::EmptyCart)));

        let res = TestClient::post("http://example.com/checkout")
            .send(&make_service(checkout))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
