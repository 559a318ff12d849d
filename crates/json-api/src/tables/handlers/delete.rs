//! Delete Table Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use mesa_app::domain::tables::models::TableId;

use crate::{extensions::*, state::State, tables::errors::into_status_error};

/// Delete Table Handler
#[endpoint(
    tags("admin"),
    summary = "Delete Table",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Table deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Table not found"),
    ),
)]
pub(crate) async fn handler(
    table: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .tables
        .delete_table(&TableId::new(table.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
