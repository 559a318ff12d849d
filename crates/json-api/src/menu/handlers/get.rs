//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use mesa_app::domain::menu::models::ProductId;

use crate::{
    extensions::*,
    menu::{errors::into_status_error, models::ProductResponse},
    state::State,
};

/// Get Product Handler
#[endpoint(tags("menu"), summary = "Get Product", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    product: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .menu
        .get_product(&ProductId::new(product.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
