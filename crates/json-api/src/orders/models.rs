//! Order Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::{domain::orders::models::Order, money::format_minor};

use crate::cart::models::CartLineResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartLineResponse>,
    pub total: u64,
    pub total_display: String,
    pub transaction_id: String,

    /// One of `pending`, `in_progress`, `completed` or `cancelled`
    pub status: String,

    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            id: order.id.into_string(),
            user_id: order.user_id.into_string(),
            items: order.items.iter().map(Into::into).collect(),
            total: order.total,
            total_display: format_minor(order.total),
            transaction_id: order.transaction_id.to_string(),
            status: order.status.to_string(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.map(|at| at.to_string()),
        }
    }
}
