//! Set Payer Card Handler

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::checkout::models::CardDetails;

use crate::{
    checkout::{errors::into_status_error, models::CheckoutResponse},
    extensions::*,
    state::State,
};

/// Card inputs exactly as typed. Only the holder, last four digits and
/// expiry are ever echoed back or stored.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SetCardRequest {
    #[serde(default)]
    pub holder_name: String,

    #[serde(default)]
    pub number: String,

    #[serde(default)]
    pub expiry: String,

    #[serde(default)]
    pub cvv: String,
}

impl Debug for SetCardRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SetCardRequest")
            .field("holder_name", &self.holder_name)
            .finish_non_exhaustive()
    }
}

impl From<SetCardRequest> for CardDetails {
    fn from(request: SetCardRequest) -> Self {
        CardDetails {
            holder_name: request.holder_name,
            number: request.number,
            expiry: request.expiry,
            cvv: request.cvv,
        }
    }
}

/// Set Payer Card Handler
#[endpoint(tags("checkout"), summary = "Set Payer Card", security(("bearer_auth" = [])))]
pub(crate) async fn handler(
    index: PathParam<usize>,
    json: JsonBody<SetCardRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckoutResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    let flow = state
        .app
        .checkout
        .set_card_details(&principal.user_id, index.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json((&flow).into()))
}
