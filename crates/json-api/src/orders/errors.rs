//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::InvalidTransition { .. } => {
            StatusError::conflict().brief(error.to_string())
        }
        OrdersServiceError::Malformed(source) => {
            error!("stored order is malformed: {source}");

            StatusError::internal_server_error()
        }
        OrdersServiceError::Store(source) => {
            error!("order storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
