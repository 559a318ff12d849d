//! Checkout Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::{
    domain::{
        checkout::{
            CheckoutFlow, Receipt,
            models::{CheckoutState, PayerSplit},
        },
        payments::models::PaymentMethod,
    },
    money::format_minor,
};

use crate::{
    cart::models::CartLineResponse, orders::models::OrderResponse,
    payments::models::{CardSummary, PaymentResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PayerResponse {
    pub index: usize,
    pub amount: u64,
    pub amount_display: String,

    /// `card` or `cash`
    pub method: String,

    /// Present for card payers. Never carries the full number or the CVV.
    pub card: Option<CardSummary>,

    /// Card fields still empty, in form order
    pub missing_fields: Vec<String>,
}

impl PayerResponse {
    fn new(index: usize, payer: &PayerSplit) -> Self {
        let by_card = payer.method == PaymentMethod::Card;

        PayerResponse {
            index,
            amount: payer.amount,
            amount_display: format_minor(payer.amount),
            method: payer.method.to_string(),
            card: by_card.then(|| payer.card.to_stored().into()),
            missing_fields: if by_card {
                payer
                    .card
                    .missing_fields()
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CheckoutResponse {
    /// `editing`, `validating`, `submitting`, `succeeded` or `failed`
    pub state: String,

    pub transaction_id: Option<String>,
    pub failure_reason: Option<String>,
    pub items: Vec<CartLineResponse>,
    pub total: u64,
    pub total_display: String,

    /// Sum of every payer's amount; must equal `total` to submit
    pub allocated: u64,

    pub payers: Vec<PayerResponse>,
}

impl From<&CheckoutFlow> for CheckoutResponse {
    fn from(flow: &CheckoutFlow) -> Self {
        let (state, transaction_id, failure_reason) = match flow.state() {
            CheckoutState::Editing => ("editing", None, None),
            CheckoutState::Validating => ("validating", None, None),
            CheckoutState::Submitting { transaction_id } => {
                ("submitting", Some(transaction_id.to_string()), None)
            }
            CheckoutState::Succeeded { transaction_id } => {
                ("succeeded", Some(transaction_id.to_string()), None)
            }
            CheckoutState::Failed { reason } => ("failed", None, Some(reason.clone())),
        };

        CheckoutResponse {
            state: state.to_string(),
            transaction_id,
            failure_reason,
            items: flow.cart().lines().iter().map(Into::into).collect(),
            total: flow.total(),
            total_display: format_minor(flow.total()),
            allocated: flow
                .payers()
                .iter()
                .fold(0_u64, |sum, payer| sum.saturating_add(payer.amount)),
            payers: flow
                .payers()
                .iter()
                .enumerate()
                .map(|(index, payer)| PayerResponse::new(index, payer))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    pub transaction_id: String,
    pub order: OrderResponse,
    pub payments: Vec<PaymentResponse>,
}

impl From<Receipt> for ReceiptResponse {
    fn from(receipt: Receipt) -> Self {
        ReceiptResponse {
            transaction_id: receipt.transaction_id.to_string(),
            order: receipt.order.into(),
            payments: receipt.payments.into_iter().map(Into::into).collect(),
        }
    }
}
