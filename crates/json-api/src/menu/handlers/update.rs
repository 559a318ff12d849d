//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use mesa_app::domain::menu::models::{Category, ProductId, ProductUpdate};

use crate::{
    extensions::*,
    menu::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Update Product Request
///
/// Omitted fields keep their current value.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl TryFrom<UpdateProductRequest> for ProductUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateProductRequest) -> Result<Self, Self::Error> {
        Ok(ProductUpdate {
            category: request
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()
                .or_400()?,
            name: request.name,
            description: request.description,
            price: request.price,
            available: request.available,
        })
    }
}

/// Update Product Handler
#[endpoint(
    tags("admin"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
#[tracing::instrument(
    name = "menu.update",
    skip_all,
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::new(product.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(&product));

    let updated = state
        .app
        .menu
        .update_product(&product, json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    info!(product_id = %updated.id, price = updated.price, "updated product");

    Ok(Json(updated.into()))
}
