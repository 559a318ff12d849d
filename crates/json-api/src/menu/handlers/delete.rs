//! Delete Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use mesa_app::domain::menu::models::ProductId;

use crate::{extensions::*, menu::errors::into_status_error, state::State};

/// Delete Product Handler
#[endpoint(
    tags("admin"),
    summary = "Delete Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Product deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .menu
        .delete_product(&ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
