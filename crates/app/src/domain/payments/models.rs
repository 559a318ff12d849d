//! Payment Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{auth::models::UserId, domain::orders::models::TransactionId, ids::DocumentId};

/// Payment Id
pub type PaymentId = DocumentId<Payment>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Cash,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Card => "card",
            Self::Cash => "cash",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            other => Err(UnknownPaymentMethod(other.to_string())),
        }
    }
}

/// Card data kept with a payment. The full number and the CVV never are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCard {
    pub holder_name: String,
    pub last4: String,
    pub expiry: String,
}

/// Payment Model
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub user_id: UserId,
    pub amount: u64,
    pub method: PaymentMethod,
    pub card: Option<StoredCard>,
    pub transaction_id: TransactionId,
    pub created_at: Timestamp,
}

/// New Payment Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub user_id: UserId,
    pub amount: u64,
    pub method: PaymentMethod,
    pub card: Option<StoredCard>,
    pub transaction_id: TransactionId,
}
