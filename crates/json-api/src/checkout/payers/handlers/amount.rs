//! Set Payer Amount Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetAmountRequest {
    /// Cents
    pub amount: u64,
}

/// Set Payer Amount Handler
///
/// Other payers keep their amounts; the split must add up before submitting.
#[endpoint(tags("checkout"), summary = "Set Payer Amount", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    index: PathParam<usize>,
    json: JsonBody<SetAmountRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let flow = state
        .app
        .checkout
        .set_split_amount(&principal.user_id, index.into_inner(), json.into_inner().amount)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&flow).into()))
}
