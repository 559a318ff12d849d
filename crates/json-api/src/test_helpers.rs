//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};
use tokio::sync::watch;

use mesa_app::{
    auth::{MockAuthService, Principal, Role, UserId},
    context::AppContext,
    domain::{
        carts::MockCartsService,
        checkout::MockCheckoutService,
        menu::{MockMenuService, models::Product},
        orders::{MockOrdersService, models::Order},
        payments::{MockPaymentIntentsService, MockPaymentsService, PaymentIntentsService},
        tables::MockTablesService,
    },
    store::{DocumentStore, Feed, MemoryDocumentStore},
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER_ID: &str = "user-1";
pub(crate) const TEST_ADMIN_ID: &str = "admin-1";

pub(crate) fn user_principal() -> Principal {
    Principal {
        user_id: UserId::new(TEST_USER_ID),
        email: "ana@example.com".to_string(),
        role: Role::User,
    }
}

pub(crate) fn admin_principal() -> Principal {
    Principal {
        user_id: UserId::new(TEST_ADMIN_ID),
        email: "chef@example.com".to_string(),
        role: Role::Admin,
    }
}

/// A feed whose first result never arrives.
pub(crate) fn loading_feed<T>() -> watch::Receiver<Feed<T>> {
    watch::channel(Feed::Loading).1
}

/// Menu mock that only allows the feed subscription made by [`State::new`].
pub(crate) fn menu_mock() -> MockMenuService {
    let mut menu = MockMenuService::new();

    menu.expect_watch_products()
        .returning(loading_feed::<Product>);

    menu
}

/// Orders mock that only allows the feed subscription made by [`State::new`].
pub(crate) fn orders_mock() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders
        .expect_watch_active_orders()
        .returning(loading_feed::<Order>);

    orders
}

/// Puts a fixed session into the depot, standing in for the auth middleware.
#[derive(Debug, Clone)]
struct InjectSession(Option<Principal>);

#[handler]
impl InjectSession {
    async fn handle(&self, depot: &mut Depot) {
        if let Some(principal) = &self.0 {
            depot.insert_session(principal.clone(), "ms_test_token");
        }
    }
}

/// One mock per service. Every default mock rejects all calls.
pub(crate) struct TestServices {
    pub(crate) menu: MockMenuService,
    pub(crate) tables: MockTablesService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) payments: MockPaymentsService,
    pub(crate) checkout: MockCheckoutService,
    pub(crate) auth: MockAuthService,
    pub(crate) payment_intents: Option<MockPaymentIntentsService>,
    pub(crate) allow_admin_signup: bool,
}

impl Default for TestServices {
    fn default() -> Self {
        let mut menu = menu_mock();

        menu.expect_list_products().never();
        menu.expect_get_product().never();
        menu.expect_create_product().never();
        menu.expect_update_product().never();
        menu.expect_delete_product().never();

        let mut tables = MockTablesService::new();

        tables.expect_list_tables().never();
        tables.expect_create_table().never();
        tables.expect_update_table().never();
        tables.expect_delete_table().never();

        let mut carts = MockCartsService::new();

        carts.expect_get_cart().never();
        carts.expect_add_to_cart().never();
        carts.expect_remove_from_cart().never();
        carts.expect_clear_cart().never();
        carts.expect_remove_ordered().never();

        let mut orders = orders_mock();

        orders.expect_create_order().never();
        orders.expect_list_orders_for_user().never();
        orders.expect_latest_order_for_user().never();
        orders.expect_list_active_orders().never();
        orders.expect_update_status().never();

        let mut payments = MockPaymentsService::new();

        payments.expect_record_payment().never();
        payments.expect_list_payments_for_transaction().never();

        let mut checkout = MockCheckoutService::new();

        checkout.expect_start_checkout().never();
        checkout.expect_get_checkout().never();
        checkout.expect_set_num_clients().never();
        checkout.expect_set_split_amount().never();
        checkout.expect_set_payment_method().never();
        checkout.expect_set_card_details().never();
        checkout.expect_submit().never();

        let mut auth = MockAuthService::new();

        auth.expect_register().never();
        auth.expect_login().never();
        auth.expect_logout().never();
        auth.expect_authenticate_bearer().never();

        Self {
            menu,
            tables,
            carts,
            orders,
            payments,
            checkout,
            auth,
            payment_intents: None,
            allow_admin_signup: false,
        }
    }
}

impl TestServices {
    pub(crate) fn into_state(self, store: Arc<dyn DocumentStore>) -> Arc<State> {
        let app = AppContext {
            menu: Arc::new(self.menu),
            tables: Arc::new(self.tables),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            payments: Arc::new(self.payments),
            checkout: Arc::new(self.checkout),
            auth: Arc::new(self.auth),
            payment_intents: self
                .payment_intents
                .map(|intents| Arc::new(intents) as Arc<dyn PaymentIntentsService>),
        };

        State::shared(app, store, self.allow_admin_signup)
    }

    /// Serve `route` with these mocks, signed in as `principal`.
    pub(crate) fn into_service(self, principal: Option<Principal>, route: Router) -> Service {
        let state = self.into_state(Arc::new(MemoryDocumentStore::new()));

        Service::new(
            Router::new()
                .hoop(inject(state))
                .hoop(InjectSession(principal))
                .push(route),
        )
    }
}

pub(crate) fn service_with_store(store: Arc<dyn DocumentStore>, route: Router) -> Service {
    let state = TestServices::default().into_state(store);

    Service::new(Router::new().hoop(inject(state)).push(route))
}
