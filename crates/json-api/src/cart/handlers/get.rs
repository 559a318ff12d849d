//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    cart::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the caller's cart; empty when nothing was saved.
#[endpoint(tags("cart"), summary = "Get Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let cart = state
        .app
        .carts
        .get_cart(&principal.user_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&cart).into()))
}
