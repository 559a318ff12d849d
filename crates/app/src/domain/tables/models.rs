//! Table Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::DocumentId;

/// Table Id
pub type TableId = DocumentId<Table>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
}

impl TableStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }
}

impl Display for TableStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown table status: {0}")]
pub struct UnknownTableStatus(pub String);

impl FromStr for TableStatus {
    type Err = UnknownTableStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            other => Err(UnknownTableStatus(other.to_string())),
        }
    }
}

/// Table Model
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: TableId,
    pub table_number: u32,
    pub status: TableStatus,
}

/// New Table Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewTable {
    pub table_number: u32,
    pub status: TableStatus,
}

/// Table Update Model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableUpdate {
    pub table_number: Option<u32>,
    pub status: Option<TableStatus>,
}
