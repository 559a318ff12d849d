//! Payment Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::{
    domain::payments::models::{Payment, StoredCard},
    money::format_minor,
};

/// The card fields that may leave the server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CardSummary {
    pub holder_name: String,
    pub last4: String,

    /// `MM/YY`
    pub expiry: String,
}

impl From<StoredCard> for CardSummary {
    fn from(card: StoredCard) -> Self {
        CardSummary {
            holder_name: card.holder_name,
            last4: card.last4,
            expiry: card.expiry,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentResponse {
    pub id: String,
    pub amount: u64,
    pub amount_display: String,
    pub method: String,
    pub card: Option<CardSummary>,
    pub transaction_id: String,
    pub created_at: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        PaymentResponse {
            id: payment.id.into_string(),
            amount: payment.amount,
            amount_display: format_minor(payment.amount),
            method: payment.method.to_string(),
            card: payment.card.map(Into::into),
            transaction_id: payment.transaction_id.to_string(),
            created_at: payment.created_at.to_string(),
        }
    }
}
