//! Orders service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::watch;
use tracing::info;

use crate::{
    auth::models::UserId,
    domain::orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderId, OrderStatus},
        repository::StoreOrdersRepository,
    },
    store::{DocumentStore, Feed},
};

#[derive(Clone)]
pub struct StoreOrdersService {
    repository: StoreOrdersRepository,
}

impl StoreOrdersService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: StoreOrdersRepository::new(store),
        }
    }
}

#[async_trait]
impl OrdersService for StoreOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let created = self.repository.create_order(order, Timestamp::now()).await?;

        info!(
            order = %created.id,
            transaction = %created.transaction_id,
            total = created.total,
            "created order"
        );

        Ok(created)
    }

    async fn list_orders_for_user(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError> {
        self.repository.list_for_user(user).await
    }

    async fn latest_order_for_user(
        &self,
        user: &UserId,
    ) -> Result<Option<Order>, OrdersServiceError> {
        Ok(self.repository.list_for_user(user).await?.into_iter().next())
    }

    async fn list_active_orders(&self) -> Result<Vec<Order>, OrdersServiceError> {
        self.repository.list_active().await
    }

    async fn update_status(
        &self,
        order: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let current = self.repository.get_order(order).await?;

        if !current.status.is_active() || current.status == status {
            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                to: status,
            });
        }

        let updated = self
            .repository
            .set_status(order, status, Timestamp::now())
            .await?;

        info!(%order, from = %current.status, to = %status, "updated order status");

        Ok(updated)
    }

    fn watch_active_orders(&self) -> watch::Receiver<Feed<Order>> {
        self.repository.watch_active()
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Persists a confirmed order.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Order history of `user`, newest first.
    async fn list_orders_for_user(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError>;

    /// The order being tracked for `user`: their most recent one.
    async fn latest_order_for_user(
        &self,
        user: &UserId,
    ) -> Result<Option<Order>, OrdersServiceError>;

    /// Pending and in-progress orders, oldest first.
    async fn list_active_orders(&self) -> Result<Vec<Order>, OrdersServiceError>;

    /// Moves an active order to `status`.
    async fn update_status(
        &self,
        order: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError>;

    /// Live kitchen board: active orders, oldest first.
    fn watch_active_orders(&self) -> watch::Receiver<Feed<Order>>;
}
