//! Payments service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::{
        orders::models::TransactionId,
        payments::{
            errors::PaymentsServiceError,
            models::{NewPayment, Payment},
            records::{COLLECTION, PaymentRecord, parse_payment},
        },
    },
    store::{DocumentStore, Query, record},
};

#[derive(Clone)]
pub struct StorePaymentsService {
    store: Arc<dyn DocumentStore>,
}

impl StorePaymentsService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PaymentsService for StorePaymentsService {
    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, PaymentsServiceError> {
        let data = record::encode(&PaymentRecord {
            user_id: payment.user_id,
            amount: payment.amount,
            method: payment.method,
            card: payment.card,
            transaction_id: payment.transaction_id,
            created_at: Timestamp::now(),
        })?;

        let created = parse_payment(self.store.create(COLLECTION, data).await?)?;

        debug!(
            payment = %created.id,
            transaction = %created.transaction_id,
            amount = created.amount,
            method = %created.method,
            "recorded payment"
        );

        Ok(created)
    }

    async fn list_payments_for_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<Vec<Payment>, PaymentsServiceError> {
        let query = Query::all().eq("transactionId", transaction.to_string());

        let mut payments =
            record::decode_all(self.store.query(COLLECTION, &query).await?, parse_payment);

        payments.sort_by_key(|payment| payment.created_at);

        Ok(payments)
    }
}

#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Persists one payer's payment.
    async fn record_payment(&self, payment: NewPayment) -> Result<Payment, PaymentsServiceError>;

    /// Every payment written under `transaction`, in write order.
    async fn list_payments_for_transaction(
        &self,
        transaction: TransactionId,
    ) -> Result<Vec<Payment>, PaymentsServiceError>;
}
