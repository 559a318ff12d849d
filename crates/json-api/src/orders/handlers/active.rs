//! Active Orders Handler

use std::sync::Arc;

use salvo::prelude::*;

use mesa_app::domain::orders::models::Order;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::index::OrdersResponse},
    state::State,
};

/// Active Orders Handler
///
/// Pending and in-progress orders for the kitchen board, oldest first.
#[endpoint(tags("admin"), summary = "Active Orders", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let cached = state
        .active_orders_feed
        .borrow()
        .ready()
        .map(<[Order]>::to_vec);

    let orders = match cached {
        Some(orders) => orders,
        None => state
            .app
            .orders
            .list_active_orders()
            .await
            .map_err(into_status_error)?,
    };

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
