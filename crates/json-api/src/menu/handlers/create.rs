//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use mesa_app::domain::menu::models::{Category, NewProduct};

use crate::{
    extensions::*,
    menu::{errors::into_status_error, models::ProductResponse},
    state::State,
};

fn available_by_default() -> bool {
    true
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Price in cents
    pub price: u64,

    /// Menu section label or slug, e.g. `Postres` or `desserts`
    pub category: String,

    #[serde(default = "available_by_default")]
    pub available: bool,
}

impl TryFrom<CreateProductRequest> for NewProduct {
    type Error = StatusError;

    fn try_from(request: CreateProductRequest) -> Result<Self, Self::Error> {
        Ok(NewProduct {
            category: request.category.parse::<Category>().or_400()?,
            name: request.name,
            description: request.description,
            price: request.price,
            available: request.available,
        })
    }
}

/// Create Product Handler
#[endpoint(
    tags("admin"),
    summary = "Create Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .menu
        .create_product(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    info!(product_id = %product.id, name = %product.name, "created product");

    res.add_header(LOCATION, format!("/menu/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::menu::{MenuServiceError, MockMenuService, models::Product};
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, admin_principal, menu_mock};

    use super::{super::tests::make_product, *};

    fn make_service(menu: MockMenuService) -> Service {
        TestServices {
            menu,
            ..TestServices::default()
        }
        .into_service(
            Some(admin_principal()),
            Router::with_path("admin/menu").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let mut menu = menu_mock();

        menu.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Churros".to_string(),
                    description: String::new(),
                    price: 4_00,
                    category: Category::Desserts,
                    available: true,
                }
            })
            .return_once(|new| {
                Ok(Product {
                    price: new.price,
                    ..make_product("p9", "Churros", Category::Desserts)
                })
            });

        let mut res = TestClient::post("http://example.com/admin/menu")
            .json(&json!({ "name": "Churros", "price": 400, "category": "Postres" }))
            .send(&make_service(menu))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/menu/p9"));
        assert_eq!(body.price, 400);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_category_returns_400() {
        let mut menu = menu_mock();

        menu.expect_create_product().never();

        let res = TestClient::post("http://example.com/admin/menu")
            .json(&json!({ "name": "Sopa", "price": 400, "category": "Sopas" }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_invalid_product_returns_400() {
        let mut menu = menu_mock();

        menu.expect_create_product()
            .once()
            .return_once(|_| Err(MenuServiceError::InvalidData("name must not be empty")));

        let res = TestClient::post("http://example.com/admin/menu")
            .json(&json!({ "name": " ", "price": 400, "category": "drinks" }))
            .send(&make_service(menu))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
