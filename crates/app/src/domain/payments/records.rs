//! Payment Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    auth::models::UserId,
    domain::{
        orders::models::TransactionId,
        payments::models::{Payment, PaymentId, PaymentMethod, StoredCard},
    },
    store::{Document, RecordError, record},
};

pub(crate) const COLLECTION: &str = "payments";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentRecord {
    pub user_id: UserId,
    pub amount: u64,
    pub method: PaymentMethod,

    #[serde(default)]
    pub card: Option<StoredCard>,

    pub transaction_id: TransactionId,
    pub created_at: Timestamp,
}

pub(crate) fn parse_payment(document: Document) -> Result<Payment, RecordError> {
    let record: PaymentRecord = record::decode(COLLECTION, &document)?;

    if record.method == PaymentMethod::Card && record.card.is_none() {
        return Err(record::invalid(
            COLLECTION,
            &document.id,
            "card payment without card details",
        ));
    }

    Ok(Payment {
        id: PaymentId::new(document.id),
        user_id: record.user_id,
        amount: record.amount,
        method: record.method,
        card: record.card,
        transaction_id: record.transaction_id,
        created_at: record.created_at,
    })
}
