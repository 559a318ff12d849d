//! Checkout Models

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use crate::domain::{
    carts::models::CartLine,
    checkout::formatting::{digits, format_expiry},
    orders::models::TransactionId,
    payments::models::{PaymentMethod, StoredCard},
};

/// Most payers a single bill can be split across.
pub const MAX_PAYERS: usize = 32;

/// Card inputs entered for one payer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub holder_name: String,
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl Debug for CardDetails {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CardDetails")
            .field("holder_name", &self.holder_name)
            .field("last4", &self.last4())
            .field("expiry", &self.expiry)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    HolderName,
    Number,
    Expiry,
    Cvv,
}

impl Display for CardField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::HolderName => "name",
            Self::Number => "number",
            Self::Expiry => "expiry",
            Self::Cvv => "cvv",
        })
    }
}

pub(crate) fn describe_fields(fields: &[CardField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl CardDetails {
    /// Fields that are still blank, in form order. Content is not checked.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<CardField> {
        [
            (CardField::HolderName, &self.holder_name),
            (CardField::Number, &self.number),
            (CardField::Expiry, &self.expiry),
            (CardField::Cvv, &self.cvv),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.trim().is_empty().then_some(field))
        .collect()
    }

    #[must_use]
    pub fn last4(&self) -> String {
        let digits = digits(&self.number);

        digits[digits.len().saturating_sub(4)..].to_string()
    }

    /// The part of the card that may be persisted.
    #[must_use]
    pub fn to_stored(&self) -> StoredCard {
        StoredCard {
            holder_name: self.holder_name.trim().to_string(),
            last4: self.last4(),
            expiry: format_expiry(&self.expiry),
        }
    }
}

/// One payer's share of the bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerSplit {
    pub amount: u64,
    pub method: PaymentMethod,
    pub card: CardDetails,
}

impl PayerSplit {
    #[must_use]
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            method: PaymentMethod::Card,
            card: CardDetails::default(),
        }
    }
}

/// Where a checkout session stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutState {
    Editing,
    Validating,
    Submitting { transaction_id: TransactionId },
    Succeeded { transaction_id: TransactionId },
    Failed { reason: String },
}

/// A payment ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPayment {
    pub amount: u64,
    pub method: PaymentMethod,
    pub card: Option<StoredCard>,
}

/// Everything a confirmed checkout writes, sharing one transaction id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheckout {
    pub transaction_id: TransactionId,
    pub items: Vec<CartLine>,
    pub total: u64,
    pub payments: Vec<PendingPayment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            holder_name: "Ana Ruiz".to_string(),
            number: "4242 4242 4242 4242".to_string(),
            expiry: "1230".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn complete_cards_have_no_missing_fields() {
        assert!(card().missing_fields().is_empty());
    }

    #[test]
    fn missing_fields_are_listed_in_form_order() {
        let details = CardDetails {
            holder_name: " ".to_string(),
            cvv: String::new(),
            ..card()
        };

        assert_eq!(
            details.missing_fields(),
            vec![CardField::HolderName, CardField::Cvv]
        );
    }

    #[test]
    fn any_non_blank_value_counts_as_filled_in() {
        let details = CardDetails {
            number: "not a number".to_string(),
            expiry: "soon".to_string(),
            cvv: "abc".to_string(),
            ..card()
        };

        assert!(details.missing_fields().is_empty());

        let blank = CardDetails {
            number: "   ".to_string(),
            ..card()
        };

        assert_eq!(blank.missing_fields(), vec![CardField::Number]);
    }

    #[test]
    fn stored_cards_keep_only_the_last_four_digits() {
        let stored = card().to_stored();

        assert_eq!(stored.last4, "4242");
        assert_eq!(stored.expiry, "12/30");
        assert_eq!(stored.holder_name, "Ana Ruiz");
    }

    #[test]
    fn debug_output_hides_number_and_cvv() {
        let rendered = format!("{:?}", card());

        assert!(!rendered.contains("4242 4242"));
        assert!(!rendered.contains("123\""));
    }
}
