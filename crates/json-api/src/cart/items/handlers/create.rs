//! Add Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::menu::models::ProductId;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Add Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    pub product_id: String,
}

/// Add Cart Item Handler
///
/// Adds one unit of a menu product, merging with an existing line.
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product is not available"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let product = ProductId::new(json.into_inner().product_id);

    let cart = state
        .app
        .carts
        .add_to_cart(&principal.user_id, &product)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&cart).into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::carts::{CartsServiceError, MockCartsService};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::{
        cart::models::tests::make_cart,
        test_helpers::{TEST_USER_ID, TestServices, user_principal},
    };

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        TestServices {
            carts,
            ..TestServices::default()
        }
        .into_service(
            Some(user_principal()),
            Router::with_path("cart/items").post(handler),
        )
    }

    #[tokio::test]
    async fn test_add_item() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .withf(|user, product| user.as_str() == TEST_USER_ID && product.as_str() == "p1")
            .return_once(|_, _| Ok(make_cart("p1", 10_00, 2)));

        let mut res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "productId": "p1" }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.items[0].quantity, 2);
        assert_eq!(body.total, 20_00);

        Ok(())
    }

    #[tokio::test]
    async fn test_unavailable_product_returns_409() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductUnavailable));

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "productId": "p1" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }

    #[tokio::test]
    async fn test_unknown_product_returns_404() {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_to_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/cart/items")
            .json(&json!({ "productId": "ghost" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
