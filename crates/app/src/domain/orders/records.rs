//! Order Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    auth::models::UserId,
    domain::{
        carts::models::CartLine,
        orders::models::{Order, OrderId, OrderStatus, TransactionId},
    },
    store::{Document, RecordError, record},
};

pub(crate) const COLLECTION: &str = "orders";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRecord {
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub transaction_id: TransactionId,
    pub status: OrderStatus,
    pub created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusPatch {
    pub status: OrderStatus,
    pub updated_at: Timestamp,
}

pub(crate) fn parse_order(document: Document) -> Result<Order, RecordError> {
    let record: OrderRecord = record::decode(COLLECTION, &document)?;

    Ok(Order {
        id: OrderId::new(document.id),
        user_id: record.user_id,
        items: record.items,
        total: record.total,
        transaction_id: record.transaction_id,
        status: record.status,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}
