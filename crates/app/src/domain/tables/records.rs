//! Table Records

use serde::{Deserialize, Serialize};

use crate::{
    domain::tables::models::{Table, TableId, TableStatus},
    store::{Document, RecordError, record},
};

pub(crate) const COLLECTION: &str = "Tables";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableRecord {
    pub table_number: u32,

    #[serde(default)]
    pub status: TableStatus,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TablePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TableStatus>,
}

pub(crate) fn parse_table(document: Document) -> Result<Table, RecordError> {
    let record: TableRecord = record::decode(COLLECTION, &document)?;

    if record.table_number == 0 {
        return Err(record::invalid(
            COLLECTION,
            &document.id,
            "table number must be at least 1",
        ));
    }

    Ok(Table {
        id: TableId::new(document.id),
        table_number: record.table_number,
        status: record.status,
    })
}
