//! Create Payment Intents Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, payments::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePaymentIntentsRequest {
    /// One amount per payer, in cents
    pub amounts: Vec<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentIntentsResponse {
    pub client_secrets: Vec<String>,
}

/// Create Payment Intents Handler
///
/// Opens one intent at the payment gateway per amount and returns their
/// client secrets in the same order.
#[endpoint(
    tags("payments"),
    summary = "Create Payment Intents",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Intents created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "No payment gateway configured"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePaymentIntentsRequest>,
    depot: &mut Depot,
) -> Result<Json<PaymentIntentsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let gateway = state.app.payment_intents.as_ref().ok_or_else(|| {
        StatusError::service_unavailable().brief("Payment gateway is not configured")
    })?;

    let client_secrets = gateway
        .create_payment_intents(&json.into_inner().amounts)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PaymentIntentsResponse { client_secrets }))
}
