//! Table Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::domain::tables::models::Table;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableResponse {
    pub id: String,
    pub table_number: u32,

    /// `available` or `occupied`
    pub status: String,
}

impl From<Table> for TableResponse {
    fn from(table: Table) -> Self {
        TableResponse {
            id: table.id.into_string(),
            table_number: table.table_number,
            status: table.status.to_string(),
        }
    }
}
