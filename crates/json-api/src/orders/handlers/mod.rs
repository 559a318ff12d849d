//! Order Handlers

pub(crate) mod active;
pub(crate) mod index;
pub(crate) mod status;
pub(crate) mod tracking;

#[cfg(test)]
pub(crate) mod tests {
    use std::num::NonZeroU32;

    use jiff::Timestamp;

    use mesa_app::{
        auth::UserId,
        domain::{
            carts::models::CartLine,
            menu::models::ProductId,
            orders::models::{Order, OrderId, OrderStatus, TransactionId},
        },
    };

    use crate::test_helpers::TEST_USER_ID;

    pub(crate) fn make_order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(id),
            user_id: UserId::new(TEST_USER_ID),
            items: vec![CartLine {
                product_id: ProductId::new("p1"),
                name: "Tacos".to_string(),
                price: 4_00,
                quantity: NonZeroU32::MIN.saturating_add(1),
            }],
            total: 8_00,
            transaction_id: TransactionId::new(),
            status,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: None,
        }
    }
}
