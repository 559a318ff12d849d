//! Checkout Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::checkout::{CheckoutError, CheckoutServiceError};

use crate::cart;

pub(crate) fn into_status_error(error: CheckoutServiceError) -> StatusError {
    match error {
        CheckoutServiceError::NotStarted => {
            StatusError::not_found().brief("No checkout in progress")
        }
        CheckoutServiceError::Flow(rejection) => flow_status_error(&rejection),
        CheckoutServiceError::Cart(source) => cart::errors::into_status_error(source),
        CheckoutServiceError::ProcessingFailed => {
            error!("checkout could not be written");

            StatusError::internal_server_error().brief("Payment processing failed")
        }
    }
}

fn flow_status_error(rejection: &CheckoutError) -> StatusError {
    let status = match rejection {
        CheckoutError::EmptyCart | CheckoutError::PayerOutOfRange { .. } => {
            StatusError::bad_request()
        }
        CheckoutError::SplitMismatch { .. } | CheckoutError::MissingCardDetails { .. } => {
            StatusError::unprocessable_entity()
        }
        CheckoutError::SubmissionInProgress
        | CheckoutError::AlreadyCompleted
        | CheckoutError::CartChanged => StatusError::conflict(),
    };

    status.brief(rejection.to_string())
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::checkout::models::CardField;
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn rejections_map_to_client_errors() {
        let cases = [
            (CheckoutError::EmptyCart, StatusCode::BAD_REQUEST),
            (
                CheckoutError::PayerOutOfRange { index: 3, payers: 2 },
                StatusCode::BAD_REQUEST,
            ),
            (
                CheckoutError::SplitMismatch {
                    expected: 10,
                    actual: 9,
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CheckoutError::MissingCardDetails {
                    payer: 0,
                    fields: vec![CardField::Cvv],
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (CheckoutError::SubmissionInProgress, StatusCode::CONFLICT),
            (CheckoutError::AlreadyCompleted, StatusCode::CONFLICT),
            (CheckoutError::CartChanged, StatusCode::CONFLICT),
        ];

        for (rejection, expected) in cases {
            let status = into_status_error(CheckoutServiceError::Flow(rejection));

            assert_eq!(status.code, expected);
        }
    }

    #[test]
    fn processing_failures_are_server_errors() {
        let status = into_status_error(CheckoutServiceError::ProcessingFailed);

        assert_eq!(status.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status.brief, "Payment processing failed");
    }
}
