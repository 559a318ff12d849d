//! Menu Repository

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    domain::menu::{
        errors::MenuServiceError,
        models::{Category, Product, ProductId},
        records::{COLLECTION, ProductPatch, ProductRecord, parse_product},
    },
    store::{Document, DocumentStore, Feed, Query, record, watch::watch_query},
};

#[derive(Clone)]
pub(crate) struct StoreMenuRepository {
    store: Arc<dyn DocumentStore>,
}

fn category_query(category: Option<Category>) -> Query {
    match category {
        Some(category) => Query::all().eq("category", category.label()),
        None => Query::all(),
    }
}

fn shape_menu(documents: Vec<Document>) -> Vec<Product> {
    let mut products = record::decode_all(documents, parse_product);

    products.sort_by(|a, b| (a.category, &a.name).cmp(&(b.category, &b.name)));

    products
}

impl StoreMenuRepository {
    pub(crate) fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub(crate) async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Product>, MenuServiceError> {
        let documents = self
            .store
            .query(COLLECTION, &category_query(category))
            .await?;

        Ok(shape_menu(documents))
    }

    pub(crate) async fn get_product(&self, id: &ProductId) -> Result<Product, MenuServiceError> {
        let document = self
            .store
            .get(COLLECTION, id.as_str())
            .await?
            .ok_or(MenuServiceError::NotFound)?;

        Ok(parse_product(document)?)
    }

    pub(crate) async fn create_product(
        &self,
        product: &ProductRecord,
    ) -> Result<Product, MenuServiceError> {
        let created = self
            .store
            .create(COLLECTION, record::encode(product)?)
            .await?;

        Ok(parse_product(created)?)
    }

    pub(crate) async fn update_product(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, MenuServiceError> {
        let updated = self
            .store
            .update(COLLECTION, id.as_str(), record::encode(patch)?)
            .await?
            .ok_or(MenuServiceError::NotFound)?;

        Ok(parse_product(updated)?)
    }

    pub(crate) async fn delete_product(&self, id: &ProductId) -> Result<bool, MenuServiceError> {
        Ok(self.store.delete(COLLECTION, id.as_str()).await?)
    }

    pub(crate) fn watch_products(&self) -> watch::Receiver<Feed<Product>> {
        watch_query(
            Arc::clone(&self.store),
            COLLECTION,
            Query::all(),
            shape_menu,
        )
    }
}
