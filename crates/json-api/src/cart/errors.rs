//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::ProductUnavailable => {
            StatusError::conflict().brief("Product is not available")
        }
        CartsServiceError::Menu(source) => {
            error!("menu lookup for cart failed: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Storage(source) => {
            error!("cart storage failed: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Encode(source) => {
            error!("cart could not be encoded: {source}");

            StatusError::internal_server_error()
        }
    }
}
