//! Table Errors

use salvo::http::StatusError;
use tracing::error;

use mesa_app::domain::tables::TablesServiceError;

pub(crate) fn into_status_error(error: TablesServiceError) -> StatusError {
    match error {
        TablesServiceError::NotFound => StatusError::not_found().brief("Table not found"),
        TablesServiceError::InvalidTableNumber => {
            StatusError::bad_request().brief("Table number must be at least 1")
        }
        TablesServiceError::Malformed(source) => {
            error!("stored table is malformed: {source}");

            StatusError::internal_server_error()
        }
        TablesServiceError::Store(source) => {
            error!("table storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
