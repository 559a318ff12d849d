//! Test Helpers

use crate::{
    auth::models::UserId,
    domain::{
        carts::models::Cart,
        menu::models::{Category, NewProduct, Product, ProductId},
        orders::models::{NewOrder, OrderStatus, TransactionId},
    },
};

pub(crate) fn new_product(name: &str, price: u64, category: Category) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        description: String::new(),
        price,
        category,
        available: true,
    }
}

/// An order for a single line priced at `total`.
pub(crate) fn new_order(user: &UserId, total: u64, status: OrderStatus) -> NewOrder {
    let mut cart = Cart::default();

    cart.add(&Product {
        id: ProductId::new("p1"),
        name: "Tacos".to_string(),
        description: String::new(),
        price: total,
        category: Category::MainCourses,
        available: true,
    });

    NewOrder {
        user_id: user.clone(),
        items: cart.lines().to_vec(),
        total,
        transaction_id: TransactionId::new(),
        status,
    }
}
