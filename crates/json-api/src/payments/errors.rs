//! Payment Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::payments::PaymentIntentsError;

pub(crate) fn into_status_error(error: PaymentIntentsError) -> StatusError {
    match error {
        PaymentIntentsError::NoAmounts
        | PaymentIntentsError::TooManyAmounts { .. }
        | PaymentIntentsError::ZeroAmount { .. } => {
            StatusError::bad_request().brief(error.to_string())
        }
        PaymentIntentsError::Http(source) => {
            error!("payment gateway request failed: {source}");

            StatusError::internal_server_error().brief("Payment gateway error")
        }
        PaymentIntentsError::UnexpectedResponse(body) => {
            error!("payment gateway rejected request: {body}");

            StatusError::internal_server_error().brief("Payment gateway error")
        }
    }
}
