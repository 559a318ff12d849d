//! Menu Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::menu::models::{Category, Product};

use crate::{
    extensions::*,
    menu::{errors::into_status_error, models::ProductResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// Products ordered by category, then name
    pub products: Vec<ProductResponse>,
}

/// `Todas`, `all` or nothing mean the whole menu.
fn parse_category(value: Option<String>) -> Result<Option<Category>, StatusError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(all) if all.eq_ignore_ascii_case("todas") || all.eq_ignore_ascii_case("all") => {
            Ok(None)
        }
        Some(category) => category.parse().map(Some).or_400(),
    }
}

/// Menu Index Handler
///
/// Returns the menu, optionally limited to one category.
#[endpoint(tags("menu"), summary = "List Menu", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let category = parse_category(category.into_inner())?;

    let cached = if category.is_none() {
        state.menu_feed.borrow().ready().map(<[Product]>::to_vec)
    } else {
        None
    };

    let products = match cached {
        Some(products) => products,
        None => state
            .app
            .menu
            .list_products(category)
            .await
            .map_err(into_status_error)?,
    };

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use mesa_app::{
        domain::menu::{MenuServiceError, MockMenuService},
        store::{Feed, StoreError},
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use tokio::sync::watch;

    use crate::test_helpers::{TestServices, menu_mock, user_principal};

    use super::{super::tests::make_product, *};

    fn make_service(menu: MockMenuService) -> Service {
        TestServices {
            menu,
            ..TestServices::default()
        }
        .into_service(Some(user_principal()), Router::with_path("menu").get(handler))
    }

    #[tokio::test]
    async fn test_index_queries_the_store_while_the_feed_loads() -> TestResult {
        let mut menu = menu_mock();

        menu.expect_list_products()
            .once()
            .withf(|category| category.is_none())
            .return_once(|_| Ok(vec![make_product("p1", "Tacos", Category::MainCourses)]));

        let response: ProductsResponse = TestClient::get("http://example.com/menu")
            .send(&make_service(menu))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 1, "expected one product");
        assert_eq!(response.products[0].category, "Platos Fuertes");
        assert_eq!(response.products[0].price_display, "$12.50");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_serves_the_live_feed() -> TestResult {
        let mut menu = MockMenuService::new();

        menu.expect_watch_products().returning(|| {
            watch::channel(Feed::Ready(vec![make_product(
                "p2",
                "Flan",
                Category::Desserts,
            )]))
            .1
        });
        menu.expect_list_products().never();

        let response: ProductsResponse = TestClient::get("http://example.com/menu")
            .send(&make_service(menu))
            .await
            .take_json()
            .await?;

        assert_eq!(response.products.len(), 1, "expected the cached product");
        assert_eq!(response.products[0].name, "Flan");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_by_category() -> TestResult {
        let mut menu = menu_mock();

        menu.expect_list_products()
            .once()
            .withf(|category| *category == Some(Category::Drinks))
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/menu?category=Bebidas")
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_todas_means_no_filter() {
        let mut menu = menu_mock();

        menu.expect_list_products()
            .once()
            .withf(|category| category.is_none())
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/menu?category=Todas")
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_unknown_category_returns_400() {
        let mut menu = menu_mock();

        menu.expect_list_products().never();

        let res = TestClient::get("http://example.com/menu?category=Sopas")
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_store_failure_returns_500() {
        let mut menu = menu_mock();

        menu.expect_list_products()
            .once()
            .return_once(|_| Err(MenuServiceError::Store(StoreError::Closed)));

        let res = TestClient::get("http://example.com/menu")
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
