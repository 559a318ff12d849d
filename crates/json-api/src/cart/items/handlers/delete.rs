//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use mesa_app::domain::menu::models::ProductId;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Handler
///
/// Drops the product's whole line. Removing an absent product is not an error.
#[endpoint(tags("cart"), summary = "Remove From Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .remove_from_cart(&principal.user_id, &ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json((&cart).into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::carts::{MockCartsService, models::Cart};
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, user_principal};

    use super::*;

    #[tokio::test]
    async fn test_remove_item() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_remove_from_cart()
            .once()
            .withf(|_, product| product.as_str() == "p1")
            .return_once(|_, _| Ok(Cart::default()));

        let mut res = TestClient::delete("http://example.com/cart/items/p1")
            .send(
                &TestServices {
                    carts,
                    ..TestServices::default()
                }
                .into_service(
                    Some(user_principal()),
                    Router::with_path("cart/items/{product}").delete(handler),
                ),
            )
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty());

        Ok(())
    }
}
