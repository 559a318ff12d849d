//! Orders Repository

use std::sync::Arc;

use jiff::Timestamp;
use tokio::sync::watch;

use crate::{
    auth::models::UserId,
    domain::orders::{
        errors::OrdersServiceError,
        models::{NewOrder, Order, OrderId, OrderStatus},
        records::{COLLECTION, OrderRecord, StatusPatch, parse_order},
    },
    store::{Document, DocumentStore, Feed, Query, record, watch::watch_query},
};

#[derive(Clone)]
pub(crate) struct StoreOrdersRepository {
    store: Arc<dyn DocumentStore>,
}

fn user_query(user: &UserId) -> Query {
    Query::all().eq("userId", user.as_str())
}

fn active_query() -> Query {
    Query::all().any_of("status", OrderStatus::ACTIVE.map(OrderStatus::as_str))
}

fn newest_first(documents: Vec<Document>) -> Vec<Order> {
    let mut orders = record::decode_all(documents, parse_order);

    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    orders
}

fn oldest_first(documents: Vec<Document>) -> Vec<Order> {
    let mut orders = record::decode_all(documents, parse_order);

    orders.sort_by_key(|order| order.created_at);

    orders
}

impl StoreOrdersRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub(crate) async fn create_order(
        &self,
        order: NewOrder,
        created_at: Timestamp,
    ) -> Result<Order, OrdersServiceError> {
        let data = record::encode(&OrderRecord {
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            transaction_id: order.transaction_id,
            status: order.status,
            created_at,
            updated_at: None,
        })?;

        Ok(parse_order(self.store.create(COLLECTION, data).await?)?)
    }

    pub(crate) async fn get_order(&self, id: &OrderId) -> Result<Order, OrdersServiceError> {
        let document = self
            .store
            .get(COLLECTION, id.as_str())
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        Ok(parse_order(document)?)
    }

    pub(crate) async fn list_for_user(&self, user: &UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let documents = self.store.query(COLLECTION, &user_query(user)).await?;

        Ok(newest_first(documents))
    }

    pub(crate) async fn list_active(&self) -> Result<Vec<Order>, OrdersServiceError> {
        let documents = self.store.query(COLLECTION, &active_query()).await?;

        Ok(oldest_first(documents))
    }

    pub(crate) async fn set_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
        updated_at: Timestamp,
    ) -> Result<Order, OrdersServiceError> {
        let patch = record::encode(&StatusPatch { status, updated_at })?;

        let document = self
            .store
            .update(COLLECTION, id.as_str(), patch)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        Ok(parse_order(document)?)
    }

    pub(crate) fn watch_active(&self) -> watch::Receiver<Feed<Order>> {
        watch_query(
            Arc::clone(&self.store),
            COLLECTION,
            active_query(),
            oldest_first,
        )
    }
}
