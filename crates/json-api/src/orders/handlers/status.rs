//! Update Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::orders::models::{OrderId, OrderStatus};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, models::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderStatusRequest {
    pub status: String,
}

/// Update Order Status Handler
#[endpoint(
    tags("admin"),
    summary = "Update Order Status",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order can no longer change"),
    ),
)]
#[tracing::instrument(name = "orders.update_status", skip_all, fields(order_id), err)]
pub(crate) async fn handler(
    order: PathParam<String>,
    json: JsonBody<UpdateOrderStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let order = OrderId::new(order.into_inner());

    tracing::Span::current().record("order_id", order.as_str());

    let status = json.into_inner().status.parse::<OrderStatus>().or_400()?;

    let updated = state
        .app
        .orders
        .update_status(&order, status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
