//! Cart Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::{
    domain::carts::models::{Cart, CartLine},
    money::format_minor,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartLineResponse {
    pub product_id: String,
    pub name: String,

    /// Unit price in cents, as it was when added
    pub price: u64,

    pub quantity: u32,
    pub subtotal: u64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        CartLineResponse {
            product_id: line.product_id.to_string(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity.get(),
            subtotal: line.subtotal(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub item_count: u64,

    /// Sum of all line subtotals in cents
    pub total: u64,

    pub total_display: String,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines().iter().map(Into::into).collect(),
            item_count: cart.item_count(),
            total: cart.total(),
            total_display: format_minor(cart.total()),
        }
    }
}
