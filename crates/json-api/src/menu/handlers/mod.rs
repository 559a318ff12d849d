//! Menu Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

#[cfg(test)]
mod tests {
    use mesa_app::domain::menu::models::{Category, Product, ProductId};

    pub(super) fn make_product(id: &str, name: &str, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: 12_50,
            category,
            available: true,
        }
    }
}
