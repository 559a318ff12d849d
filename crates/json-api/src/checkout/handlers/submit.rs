//! Submit Checkout Handler

use std::sync::Arc;

use salvo::prelude::*;

use mesa_app::domain::checkout::CheckoutServiceError;

use crate::{
    checkout::{errors::into_status_error, models::ReceiptResponse},
    extensions::*,
    observability::{CheckoutOutcome, observe_checkout},
    state::State,
};

/// Submit Checkout Handler
///
/// Writes one payment per payer, then the order, then clears the cart.
/// Nothing is written when validation fails.
#[endpoint(
    tags("checkout"),
    summary = "Submit Checkout",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::CONFLICT, description = "Checkout can no longer be submitted"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Split or card details incomplete"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Payment processing failed"),
    ),
)]
#[tracing::instrument(name = "checkout.submit", skip_all, fields(user_id), err)]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;

    tracing::Span::current().record("user_id", principal.user_id.as_str());

    let receipt = match state.app.checkout.submit(&principal.user_id).await {
        Ok(receipt) => {
            observe_checkout(CheckoutOutcome::Succeeded);

            receipt
        }
        Err(error) => {
            observe_checkout(match error {
                CheckoutServiceError::ProcessingFailed | CheckoutServiceError::Cart(_) => {
                    CheckoutOutcome::Failed
                }
                CheckoutServiceError::NotStarted | CheckoutServiceError::Flow(_) => {
                    CheckoutOutcome::Rejected
                }
            });

            return Err(into_status_error(error));
        }
    };

    res.status_code(StatusCode::CREATED);
    res.render(Json(ReceiptResponse::from(receipt)));

    Ok(())
}
