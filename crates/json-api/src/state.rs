//! State

use std::sync::Arc;

use tokio::sync::watch;

use mesa_app::{
    context::AppContext,
    domain::{menu::models::Product, orders::models::Order},
    store::{DocumentStore, Feed},
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) store: Arc<dyn DocumentStore>,

    /// Live copy of the whole menu, kept current by a store subscription.
    pub(crate) menu_feed: watch::Receiver<Feed<Product>>,

    /// Live kitchen board of pending and in-progress orders.
    pub(crate) active_orders_feed: watch::Receiver<Feed<Order>>,

    /// Whether public registration may request the admin role.
    pub(crate) allow_admin_signup: bool,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        app: AppContext,
        store: Arc<dyn DocumentStore>,
        allow_admin_signup: bool,
    ) -> Self {
        Self {
            menu_feed: app.menu.watch_products(),
            active_orders_feed: app.orders.watch_active_orders(),
            app,
            store,
            allow_admin_signup,
        }
    }

    #[must_use]
    pub(crate) fn shared(
        app: AppContext,
        store: Arc<dyn DocumentStore>,
        allow_admin_signup: bool,
    ) -> Arc<Self> {
        Arc::new(Self::new(app, store, allow_admin_signup))
    }
}
