//! Menu Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::menu::MenuServiceError;

pub(crate) fn into_status_error(error: MenuServiceError) -> StatusError {
    match error {
        MenuServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        MenuServiceError::InvalidData(reason) => StatusError::bad_request().brief(reason),
        MenuServiceError::Malformed(source) => {
            error!("stored product is malformed: {source}");

            StatusError::internal_server_error()
        }
        MenuServiceError::Store(source) => {
            error!("menu storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
