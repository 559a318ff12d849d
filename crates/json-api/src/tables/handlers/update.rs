//! Update Table Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::tables::models::{TableId, TableStatus, TableUpdate};

use crate::{
    extensions::*,
    state::State,
    tables::{errors::into_status_error, models::TableResponse},
};

/// Update Table Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateTableRequest {
    pub table_number: Option<u32>,
    pub status: Option<String>,
}

impl TryFrom<UpdateTableRequest> for TableUpdate {
    type Error = StatusError;

    fn try_from(request: UpdateTableRequest) -> Result<Self, Self::Error> {
        Ok(TableUpdate {
            table_number: request.table_number,
            status: request
                .status
                .as_deref()
                .map(str::parse::<TableStatus>)
                .transpose()
                .or_400()?,
        })
    }
}

/// Update Table Handler
#[endpoint(
    tags("admin"),
    summary = "Update Table",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Table updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Table not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    table: PathParam<String>,
    json: JsonBody<UpdateTableRequest>,
    depot: &mut Depot,
) -> Result<Json<TableResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let table = state
        .app
        .tables
        .update_table(
            &TableId::new(table.into_inner()),
            json.into_inner().try_into()?,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(table.into()))
}
