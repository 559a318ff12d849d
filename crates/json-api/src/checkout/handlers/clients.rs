//! Set Number Of Clients Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetClientsRequest {
    /// Clamped to between 1 and 32 payers
    pub count: usize,
}

/// Set Number Of Clients Handler
///
/// Splits the bill evenly again. Per-payer edits are discarded.
#[endpoint(tags("checkout"), summary = "Set Number Of Clients", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    json: JsonBody<SetClientsRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let flow = state
        .app
        .checkout
        .set_num_clients(&principal.user_id, json.into_inner().count)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&flow).into()))
}
