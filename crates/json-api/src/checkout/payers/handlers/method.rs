//! Set Payer Method Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::payments::models::PaymentMethod;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetMethodRequest {
    /// `card` or `cash`
    pub method: String,
}

/// Set Payer Method Handler
#[endpoint(tags("checkout"), summary = "Set Payer Method", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    index: PathParam<usize>,
    json: JsonBody<SetMethodRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let method = json.into_inner().method.parse::<PaymentMethod>().or_400()?;

    let flow = state
        .app
        .checkout
        .set_payment_method(&principal.user_id, index.into_inner(), method)
        .await
        .map_err(into_status_error)?;

    Ok(Json((&flow).into()))
}
