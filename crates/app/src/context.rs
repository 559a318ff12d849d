//! App Context

use std::sync::Arc;

use crate::{
    auth::{AuthService, IdentityProvider, StoreAuthService},
    domain::{
        carts::{CartStorage, CartsService, LocalCartsService},
        checkout::{CheckoutService, StoreCheckoutService},
        menu::{MenuService, StoreMenuService},
        orders::{OrdersService, StoreOrdersService},
        payments::{PaymentIntentsService, PaymentsService, StorePaymentsService},
        tables::{StoreTablesService, TablesService},
    },
    store::DocumentStore,
};

/// Every service the application exposes, wired to shared collaborators.
#[derive(Clone)]
pub struct AppContext {
    pub menu: Arc<dyn MenuService>,
    pub tables: Arc<dyn TablesService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub payments: Arc<dyn PaymentsService>,
    pub checkout: Arc<dyn CheckoutService>,
    pub auth: Arc<dyn AuthService>,

    /// Absent when no payment gateway is configured.
    pub payment_intents: Option<Arc<dyn PaymentIntentsService>>,
}

impl AppContext {
    #[must_use]
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        cart_storage: Arc<dyn CartStorage>,
        payment_intents: Option<Arc<dyn PaymentIntentsService>>,
    ) -> Self {
        let menu: Arc<dyn MenuService> = Arc::new(StoreMenuService::new(Arc::clone(&store)));
        let orders: Arc<dyn OrdersService> = Arc::new(StoreOrdersService::new(Arc::clone(&store)));
        let payments: Arc<dyn PaymentsService> =
            Arc::new(StorePaymentsService::new(Arc::clone(&store)));
        let carts: Arc<dyn CartsService> =
            Arc::new(LocalCartsService::new(cart_storage, Arc::clone(&menu)));

        Self {
            tables: Arc::new(StoreTablesService::new(Arc::clone(&store))),
            checkout: Arc::new(StoreCheckoutService::new(
                Arc::clone(&carts),
                Arc::clone(&orders),
                Arc::clone(&payments),
            )),
            auth: Arc::new(StoreAuthService::new(identity, store)),
            menu,
            carts,
            orders,
            payments,
            payment_intents,
        }
    }
}
