//! Order Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{auth::models::UserId, domain::carts::models::CartLine, ids::DocumentId};

/// Order Id
pub type OrderId = DocumentId<Order>;

/// Groups the payments and the order written by one checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ACTIVE: [Self; 2] = [Self::Pending, Self::InProgress];

    /// Active orders still show up on the kitchen board and may change status.
    #[must_use]
    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        [
            Self::Pending,
            Self::InProgress,
            Self::Completed,
            Self::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str() == value)
        .ok_or_else(|| UnknownOrderStatus(value.to_string()))
    }
}

/// Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub transaction_id: TransactionId,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

/// New Order Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub transaction_id: TransactionId,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pending_and_in_progress_are_active() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::InProgress.is_active());
        assert!(!OrderStatus::Completed.is_active());
        assert!(!OrderStatus::Cancelled.is_active());
    }

    #[test]
    fn statuses_serialize_in_snake_case() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress)?,
            "\"in_progress\""
        );

        Ok(())
    }

    #[test]
    fn statuses_parse_from_their_wire_names() {
        assert_eq!("in_progress".parse(), Ok(OrderStatus::InProgress));
        assert_eq!(
            "shipped".parse::<OrderStatus>(),
            Err(UnknownOrderStatus("shipped".to_string()))
        );
    }
}
