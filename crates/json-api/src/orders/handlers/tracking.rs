//! Order Tracking Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

/// Order Tracking Handler
///
/// Returns the caller's most recent order.
#[endpoint(
    tags("orders"),
    summary = "Track Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Latest order"),
        (status_code = StatusCode::NOT_FOUND, description = "No orders placed yet"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let order = state
        .app
        .orders
        .latest_order_for_user(&principal.user_id)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("No orders placed yet"))?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::orders::{MockOrdersService, models::OrderStatus};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        orders::handlers::tests::make_order,
        test_helpers::{TestServices, orders_mock, user_principal},
    };

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        TestServices {
            orders,
            ..TestServices::default()
        }
        .into_service(
            Some(user_principal()),
            Router::with_path("orders/tracking").get(handler),
        )
    }

    #[tokio::test]
    async fn test_tracking_returns_latest_order() -> TestResult {
        let mut orders = orders_mock();

        orders
            .expect_latest_order_for_user()
            .once()
            .return_once(|_| Ok(Some(make_order("o9", OrderStatus::InProgress))));

        let response: OrderResponse = TestClient::get("http://example.com/orders/tracking")
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(response.id, "o9");
        assert_eq!(response.status, "in_progress");

        Ok(())
    }

    #[tokio::test]
    async fn test_tracking_without_orders_returns_404() {
        let mut orders = orders_mock();

        orders
            .expect_latest_order_for_user()
            .once()
            .return_once(|_| Ok(None));

        let res = TestClient::get("http://example.com/orders/tracking")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
