//! Carts service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    auth::models::UserId,
    domain::{
        carts::{
            errors::CartsServiceError,
            models::{Cart, CartLine},
            storage::CartStorage,
        },
        menu::{MenuService, models::ProductId},
    },
};

/// Cart service persisting each user's cart through a [`CartStorage`].
///
/// Read-modify-write cycles are serialized so concurrent requests from the
/// same user never lose an update.
pub struct LocalCartsService {
    storage: Arc<dyn CartStorage>,
    menu: Arc<dyn MenuService>,
    lock: Mutex<()>,
}

impl LocalCartsService {
    #[must_use]
    pub fn new(storage: Arc<dyn CartStorage>, menu: Arc<dyn MenuService>) -> Self {
        Self {
            storage,
            menu,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self, user: &UserId) -> Result<Cart, CartsServiceError> {
        let Some(contents) = self.storage.load(user).await? else {
            return Ok(Cart::default());
        };

        match serde_json::from_slice(&contents) {
            Ok(cart) => Ok(cart),
            Err(error) => {
                warn!(%user, "discarding unreadable stored cart: {error}");

                Ok(Cart::default())
            }
        }
    }

    async fn store(&self, user: &UserId, cart: &Cart) -> Result<(), CartsServiceError> {
        let contents = serde_json::to_vec(cart).map_err(CartsServiceError::Encode)?;

        self.storage.save(user, contents).await?;

        debug!(%user, lines = cart.lines().len(), total = cart.total(), "stored cart");

        Ok(())
    }

    async fn modify<F>(&self, user: &UserId, change: F) -> Result<Cart, CartsServiceError>
    where
        F: FnOnce(&mut Cart) + Send,
    {
        let _guard = self.lock.lock().await;

        let mut cart = self.load(user).await?;

        change(&mut cart);

        self.store(user, &cart).await?;

        Ok(cart)
    }
}

#[async_trait]
impl CartsService for LocalCartsService {
    async fn get_cart(&self, user: &UserId) -> Result<Cart, CartsServiceError> {
        self.load(user).await
    }

    async fn add_to_cart(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<Cart, CartsServiceError> {
        let product = self.menu.get_product(product).await?;

        if !product.available {
            return Err(CartsServiceError::ProductUnavailable);
        }

        self.modify(user, |cart| cart.add(&product)).await
    }

    async fn remove_from_cart(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<Cart, CartsServiceError> {
        self.modify(user, |cart| {
            cart.remove(product);
        })
        .await
    }

    async fn clear_cart(&self, user: &UserId) -> Result<Cart, CartsServiceError> {
        self.modify(user, Cart::clear).await
    }

    async fn remove_ordered(
        &self,
        user: &UserId,
        ordered: &[CartLine],
    ) -> Result<Cart, CartsServiceError> {
        self.modify(user, |cart| cart.subtract(ordered)).await
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Current cart of `user`, empty when nothing usable is stored.
    async fn get_cart(&self, user: &UserId) -> Result<Cart, CartsServiceError>;

    /// Adds one unit of a menu product.
    async fn add_to_cart(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<Cart, CartsServiceError>;

    /// Removes the product's line entirely.
    async fn remove_from_cart(
        &self,
        user: &UserId,
        product: &ProductId,
    ) -> Result<Cart, CartsServiceError>;

    async fn clear_cart(&self, user: &UserId) -> Result<Cart, CartsServiceError>;

    /// Takes the ordered lines out of the cart, keeping anything added since.
    async fn remove_ordered(
        &self,
        user: &UserId,
        ordered: &[CartLine],
    ) -> Result<Cart, CartsServiceError>;
}
