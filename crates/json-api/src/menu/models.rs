//! Menu Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use mesa_app::{domain::menu::models::Product, money::format_minor};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Price in cents
    pub price: u64,

    /// Price formatted for display, e.g. `$12.50`
    pub price_display: String,

    /// Menu section label, e.g. `Entradas`
    pub category: String,

    pub available: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_string(),
            price_display: format_minor(product.price),
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category.label().to_string(),
            available: product.available,
        }
    }
}
