//! Menu service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::watch;
use tracing::info;

use crate::{
    domain::menu::{
        errors::MenuServiceError,
        models::{Category, NewProduct, Product, ProductId, ProductUpdate},
        records::{ProductPatch, ProductRecord},
        repository::StoreMenuRepository,
    },
    store::{DocumentStore, Feed},
};

#[derive(Clone)]
pub struct StoreMenuService {
    repository: StoreMenuRepository,
}

impl StoreMenuService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            repository: StoreMenuRepository::new(store),
        }
    }
}

fn validate_name(name: &str) -> Result<(), MenuServiceError> {
    if name.trim().is_empty() {
        return Err(MenuServiceError::InvalidData("name must not be empty"));
    }

    Ok(())
}

#[async_trait]
impl MenuService for StoreMenuService {
    async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Product>, MenuServiceError> {
        self.repository.list_products(category).await
    }

    async fn get_product(&self, product: &ProductId) -> Result<Product, MenuServiceError> {
        self.repository.get_product(product).await
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, MenuServiceError> {
        validate_name(&product.name)?;

        let created = self
            .repository
            .create_product(&ProductRecord::from(product))
            .await?;

        info!(product = %created.id, "created menu product");

        Ok(created)
    }

    async fn update_product(
        &self,
        product: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, MenuServiceError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }

        self.repository
            .update_product(product, &ProductPatch::from(update))
            .await
    }

    async fn delete_product(&self, product: &ProductId) -> Result<(), MenuServiceError> {
        if !self.repository.delete_product(product).await? {
            return Err(MenuServiceError::NotFound);
        }

        info!(%product, "deleted menu product");

        Ok(())
    }

    fn watch_products(&self) -> watch::Receiver<Feed<Product>> {
        self.repository.watch_products()
    }
}

#[automock]
#[async_trait]
pub trait MenuService: Send + Sync {
    /// Retrieves every product, optionally limited to one category.
    async fn list_products(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Product>, MenuServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: &ProductId) -> Result<Product, MenuServiceError>;

    /// Adds a product to the menu.
    async fn create_product(&self, product: NewProduct) -> Result<Product, MenuServiceError>;

    /// Applies `update` to an existing product.
    async fn update_product(
        &self,
        product: &ProductId,
        update: ProductUpdate,
    ) -> Result<Product, MenuServiceError>;

    /// Removes a product from the menu.
    async fn delete_product(&self, product: &ProductId) -> Result<(), MenuServiceError>;

    /// Live view of the whole menu.
    fn watch_products(&self) -> watch::Receiver<Feed<Product>>;
}
