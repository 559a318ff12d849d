//! Checkout service.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::{
    auth::models::UserId,
    domain::{
        carts::CartsService,
        checkout::{
            errors::{CheckoutError, CheckoutServiceError},
            flow::CheckoutFlow,
            models::{CardDetails, CheckoutState, PendingCheckout},
        },
        orders::{
            OrdersService,
            models::{NewOrder, Order, OrderStatus, TransactionId},
        },
        payments::{
            PaymentsService,
            models::{NewPayment, Payment, PaymentMethod},
        },
    },
};

/// What a confirmed checkout wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub transaction_id: TransactionId,
    pub order: Order,
    pub payments: Vec<Payment>,
}

/// Checkout sessions kept in memory, one per user.
pub struct StoreCheckoutService {
    carts: Arc<dyn CartsService>,
    orders: Arc<dyn OrdersService>,
    payments: Arc<dyn PaymentsService>,
    sessions: Mutex<HashMap<UserId, CheckoutFlow>>,
}

impl StoreCheckoutService {
    #[must_use]
    pub fn new(
        carts: Arc<dyn CartsService>,
        orders: Arc<dyn OrdersService>,
        payments: Arc<dyn PaymentsService>,
    ) -> Self {
        Self {
            carts,
            orders,
            payments,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    async fn edit<F>(&self, user: &UserId, change: F) -> Result<CheckoutFlow, CheckoutServiceError>
    where
        F: FnOnce(&mut CheckoutFlow) -> Result<(), CheckoutError> + Send,
    {
        let mut sessions = self.sessions.lock().await;

        let flow = sessions
            .get_mut(user)
            .ok_or(CheckoutServiceError::NotStarted)?;

        change(flow)?;

        Ok(flow.clone())
    }

    async fn fail(&self, user: &UserId, reason: String) {
        if let Some(flow) = self.sessions.lock().await.get_mut(user) {
            flow.complete(Err(reason));
        }
    }

    async fn write(
        &self,
        user: &UserId,
        pending: PendingCheckout,
    ) -> Result<(Order, Vec<Payment>), String> {
        let mut payments = Vec::with_capacity(pending.payments.len());

        for payment in pending.payments {
            let recorded = self
                .payments
                .record_payment(NewPayment {
                    user_id: user.clone(),
                    amount: payment.amount,
                    method: payment.method,
                    card: payment.card,
                    transaction_id: pending.transaction_id,
                })
                .await
                .map_err(|error| format!("payment {} failed: {error}", payments.len()))?;

            payments.push(recorded);
        }

        let order = self
            .orders
            .create_order(NewOrder {
                user_id: user.clone(),
                items: pending.items,
                total: pending.total,
                transaction_id: pending.transaction_id,
                status: OrderStatus::Completed,
            })
            .await
            .map_err(|error| format!("order failed: {error}"))?;

        Ok((order, payments))
    }
}

#[async_trait]
impl CheckoutService for StoreCheckoutService {
    async fn start_checkout(&self, user: &UserId) -> Result<CheckoutFlow, CheckoutServiceError> {
        let cart = self.carts.get_cart(user).await?;
        let flow = CheckoutFlow::new(cart)?;

        let mut sessions = self.sessions.lock().await;

        if let Some(existing) = sessions.get(user)
            && matches!(existing.state(), CheckoutState::Submitting { .. })
        {
            return Err(CheckoutError::SubmissionInProgress.into());
        }

        sessions.insert(user.clone(), flow.clone());

        Ok(flow)
    }

    async fn get_checkout(&self, user: &UserId) -> Result<CheckoutFlow, CheckoutServiceError> {
        self.sessions
            .lock()
            .await
            .get(user)
            .cloned()
            .ok_or(CheckoutServiceError::NotStarted)
    }

    async fn set_num_clients(
        &self,
        user: &UserId,
        count: usize,
    ) -> Result<CheckoutFlow, CheckoutServiceError> {
        self.edit(user, |flow| flow.set_num_clients(count)).await
    }

    async fn set_split_amount(
        &self,
        user: &UserId,
        payer: usize,
        amount: u64,
    ) -> Result<CheckoutFlow, CheckoutServiceError> {
        self.edit(user, |flow| flow.set_split_amount(payer, amount))
            .await
    }

    async fn set_payment_method(
        &self,
        user: &UserId,
        payer: usize,
        method: PaymentMethod,
    ) -> Result<CheckoutFlow, CheckoutServiceError> {
        self.edit(user, |flow| flow.set_payment_method(payer, method))
            .await
    }

    async fn set_card_details(
        &self,
        user: &UserId,
        payer: usize,
        details: CardDetails,
    ) -> Result<CheckoutFlow, CheckoutServiceError> {
        self.edit(user, |flow| flow.set_card_details(payer, details))
            .await
    }

    async fn submit(&self, user: &UserId) -> Result<Receipt, CheckoutServiceError> {
        let current = self.carts.get_cart(user).await?;

        let pending = {
            let mut sessions = self.sessions.lock().await;

            sessions
                .get_mut(user)
                .ok_or(CheckoutServiceError::NotStarted)?
                .begin_submit(&current)?
        };

        let transaction_id = pending.transaction_id;

        let (order, payments) = match self.write(user, pending).await {
            Ok(written) => written,
            Err(reason) => {
                error!(%user, transaction = %transaction_id, "checkout failed: {reason}");

                self.fail(user, reason).await;

                return Err(CheckoutServiceError::ProcessingFailed);
            }
        };

        match self.carts.remove_ordered(user, &order.items).await {
            Ok(left) if !left.is_empty() => info!(
                %user,
                transaction = %transaction_id,
                lines = left.lines().len(),
                "kept cart lines added during checkout"
            ),
            Ok(_) => {}
            Err(error) => {
                warn!(%user, transaction = %transaction_id, "order placed but cart not cleared: {error}");
            }
        }

        self.sessions.lock().await.remove(user);

        info!(
            %user,
            transaction = %transaction_id,
            order = %order.id,
            payers = payments.len(),
            "checkout succeeded"
        );

        Ok(Receipt {
            transaction_id,
            order,
            payments,
        })
    }
}

#[automock]
#[async_trait]
pub trait CheckoutService: Send + Sync {
    /// Opens a checkout for the user's current cart, replacing any previous one.
    async fn start_checkout(&self, user: &UserId) -> Result<CheckoutFlow, CheckoutServiceError>;

    async fn get_checkout(&self, user: &UserId) -> Result<CheckoutFlow, CheckoutServiceError>;

    /// Re-splits the bill evenly, discarding per-payer edits.
    async fn set_num_clients(
        &self,
        user: &UserId,
        count: usize,
    ) -> Result<CheckoutFlow, CheckoutServiceError>;

    async fn set_split_amount(
        &self,
        user: &UserId,
        payer: usize,
        amount: u64,
    ) -> Result<CheckoutFlow, CheckoutServiceError>;

    async fn set_payment_method(
        &self,
        user: &UserId,
        payer: usize,
        method: PaymentMethod,
    ) -> Result<CheckoutFlow, CheckoutServiceError>;

    async fn set_card_details(
        &self,
        user: &UserId,
        payer: usize,
        details: CardDetails,
    ) -> Result<CheckoutFlow, CheckoutServiceError>;

    /// Writes one payment per payer, then the order, then takes the ordered
    /// lines out of the cart. A successful checkout is closed and forgotten.
    async fn submit(&self, user: &UserId) -> Result<Receipt, CheckoutServiceError>;
}
