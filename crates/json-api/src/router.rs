//! App Router

use salvo::Router;

use mesa_app::navigation::View;

use crate::{
    auth::{self, gate::require},
    cart, checkout, healthcheck, menu, observability, orders, payments, tables,
};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(
            Router::with_path("auth")
                .push(Router::with_path("register").post(auth::register::handler))
                .push(Router::with_path("login").post(auth::login::handler)),
        )
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(Router::with_path("auth/logout").post(auth::logout::handler))
                .push(Router::with_path("session/views").get(auth::views::handler))
                .push(menu_router())
                .push(ordering_router())
                .push(
                    Router::with_path("orders/tracking")
                        .hoop(require(View::Tracking))
                        .get(orders::tracking::handler),
                )
                .push(
                    Router::with_path("orders")
                        .hoop(require(View::History))
                        .get(orders::index::handler),
                )
                .push(admin_router()),
        )
}

fn menu_router() -> Router {
    Router::with_path("menu")
        .hoop(require(View::Menu))
        .get(menu::index::handler)
        .push(Router::with_path("{product}").get(menu::get::handler))
}

/// Cart, checkout and payment intents all sit behind the cart view.
fn ordering_router() -> Router {
    Router::new()
        .hoop(require(View::Cart))
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .delete(cart::clear::handler)
                .push(
                    Router::with_path("items")
                        .post(cart::items::create::handler)
                        .push(Router::with_path("{product}").delete(cart::items::delete::handler)),
                ),
        )
        .push(
            Router::with_path("checkout")
                .post(checkout::start::handler)
                .get(checkout::get::handler)
                .push(Router::with_path("clients").put(checkout::clients::handler))
                .push(Router::with_path("submit").post(checkout::submit::handler))
                .push(
                    Router::with_path("payers/{index}")
                        .push(Router::with_path("amount").put(checkout::payers::amount::handler))
                        .push(Router::with_path("method").put(checkout::payers::method::handler))
                        .push(Router::with_path("card").put(checkout::payers::card::handler)),
                ),
        )
        .push(Router::with_path("payments/intents").post(payments::intents::handler))
}

fn admin_router() -> Router {
    Router::with_path("admin")
        .hoop(require(View::Admin))
        .push(
            Router::with_path("menu")
                .post(menu::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(menu::update::handler)
                        .delete(menu::delete::handler),
                ),
        )
        .push(
            Router::with_path("tables")
                .get(tables::index::handler)
                .post(tables::create::handler)
                .push(
                    Router::with_path("{table}")
                        .put(tables::update::handler)
                        .delete(tables::delete::handler),
                ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::active::handler)
                .push(Router::with_path("{order}/status").put(orders::status::handler)),
        )
}
