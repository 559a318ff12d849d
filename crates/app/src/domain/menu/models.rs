//! Menu Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::DocumentId;

/// Product Id
pub type ProductId = DocumentId<Product>;

/// Menu section a product is listed under.
///
/// Stored with the labels the restaurant prints on its menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Entradas")]
    Starters,

    #[serde(rename = "Platos Fuertes")]
    MainCourses,

    #[serde(rename = "Postres")]
    Desserts,

    #[serde(rename = "Bebidas")]
    Drinks,
}

impl Category {
    pub const ALL: [Self; 4] = [
        Self::Starters,
        Self::MainCourses,
        Self::Desserts,
        Self::Drinks,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Starters => "Entradas",
            Self::MainCourses => "Platos Fuertes",
            Self::Desserts => "Postres",
            Self::Drinks => "Bebidas",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::Starters => "starters",
            Self::MainCourses => "main_courses",
            Self::Desserts => "desserts",
            Self::Drinks => "drinks",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown menu category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| {
                category.label().eq_ignore_ascii_case(value) || category.slug() == value
            })
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub available: bool,
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub available: bool,
}

/// Product Update Model
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub category: Option<Category>,
    pub available: Option<bool>,
}
