//! Menu Records

use serde::{Deserialize, Serialize};

use crate::{
    domain::menu::models::{Category, NewProduct, Product, ProductId, ProductUpdate},
    store::{Document, RecordError, record},
};

pub(crate) const COLLECTION: &str = "Menu";

/// Product document as stored in the `Menu` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRecord {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub price: u64,
    pub category: Category,

    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

/// Partial product document merged on update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl From<NewProduct> for ProductRecord {
    fn from(product: NewProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            category: product.category,
            available: product.available,
        }
    }
}

impl From<ProductUpdate> for ProductPatch {
    fn from(update: ProductUpdate) -> Self {
        Self {
            name: update.name,
            description: update.description,
            price: update.price,
            category: update.category,
            available: update.available,
        }
    }
}

pub(crate) fn parse_product(document: Document) -> Result<Product, RecordError> {
    let record: ProductRecord = record::decode(COLLECTION, &document)?;

    if record.name.trim().is_empty() {
        return Err(record::invalid(COLLECTION, &document.id, "name is empty"));
    }

    Ok(Product {
        id: ProductId::new(document.id),
        name: record.name,
        description: record.description,
        price: record.price,
        category: record.category,
        available: record.available,
    })
}
