//! Cart Models

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::menu::models::{Product, ProductId};

/// One product in the cart. The price is copied when the product is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: u64,
    pub quantity: NonZeroU32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity.get()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cart holds more than one line for product {0}")]
pub struct DuplicateLine(pub ProductId);

/// Cart Model
///
/// Holds at most one line per product; every line has a quantity of at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = DuplicateLine;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        for (index, line) in lines.iter().enumerate() {
            if lines[..index]
                .iter()
                .any(|earlier| earlier.product_id == line.product_id)
            {
                return Err(DuplicateLine(line.product_id.clone()));
            }
        }

        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl Cart {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price × quantity` over every line.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.subtotal()))
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Add one unit of `product`, merging into its existing line.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);

            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: NonZeroU32::MIN,
        });
    }

    /// Remove the whole line for `product`. Returns `false` when absent.
    pub fn remove(&mut self, product: &ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| &line.product_id != product);

        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Take `ordered` out of the cart, unit by unit.
    ///
    /// Units beyond the ordered quantity and products that were never ordered
    /// stay in the cart.
    pub fn subtract(&mut self, ordered: &[CartLine]) {
        for taken in ordered {
            self.lines.retain_mut(|line| {
                if line.product_id != taken.product_id {
                    return true;
                }

                match NonZeroU32::new(line.quantity.get().saturating_sub(taken.quantity.get())) {
                    Some(left) => {
                        line.quantity = left;

                        true
                    }
                    None => false,
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::menu::models::Category;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product {id}"),
            description: String::new(),
            price,
            category: Category::MainCourses,
            available: true,
        }
    }

    fn quantities(cart: &Cart) -> Vec<(String, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.product_id.to_string(), line.quantity.get()))
            .collect()
    }

    #[test]
    fn adding_twice_merges_into_one_line() {
        let mut cart = Cart::default();
        let taco = product("1", 10_00);

        cart.add(&taco);
        cart.add(&taco);

        assert_eq!(quantities(&cart), vec![("1".to_string(), 2)]);
        assert_eq!(cart.total(), 20_00);
    }

    #[test]
    fn remove_drops_the_whole_line() {
        let mut cart = Cart::default();
        let taco = product("1", 10_00);

        cart.add(&taco);
        cart.add(&taco);
        cart.add(&taco);

        assert!(cart.remove(&taco.id));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn removing_an_absent_product_is_a_no_op() {
        let mut cart = Cart::default();

        cart.add(&product("1", 500));

        assert!(!cart.remove(&ProductId::new("2")));
        assert_eq!(cart.total(), 500);
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut cart = Cart::default();
        let a = product("a", 250);
        let b = product("b", 1_000);

        let steps: [(&Product, bool); 6] = [
            (&a, true),
            (&b, true),
            (&a, true),
            (&b, false),
            (&b, true),
            (&a, false),
        ];

        for (product, add) in steps {
            if add {
                cart.add(product);
            } else {
                cart.remove(&product.id);
            }

            let expected: u64 = cart
                .lines()
                .iter()
                .map(|line| line.price * u64::from(line.quantity.get()))
                .sum();

            assert_eq!(cart.total(), expected);
        }

        assert_eq!(cart.total(), 1_000);
    }

    #[test]
    fn clear_always_empties_the_cart() {
        let mut cart = Cart::default();

        cart.add(&product("1", 100));
        cart.add(&product("2", 200));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn subtract_keeps_units_and_lines_that_were_not_ordered() {
        let mut cart = Cart::default();
        let taco = product("1", 10_00);
        let soda = product("2", 2_00);

        cart.add(&taco);
        let ordered = cart.lines().to_vec();

        cart.add(&taco);
        cart.add(&soda);
        cart.subtract(&ordered);

        assert_eq!(
            quantities(&cart),
            vec![("1".to_string(), 1), ("2".to_string(), 1)]
        );

        cart.subtract(&ordered);

        assert_eq!(quantities(&cart), vec![("2".to_string(), 1)]);
    }

    #[test]
    fn price_is_copied_at_add_time() {
        let mut cart = Cart::default();
        let mut taco = product("1", 100);

        cart.add(&taco);
        taco.price = 900;
        cart.add(&taco);

        assert_eq!(cart.total(), 200);
    }

    #[test]
    fn deserializing_rejects_duplicate_and_zero_quantity_lines() {
        let duplicate = json!([
            { "productId": "1", "name": "a", "price": 1, "quantity": 1 },
            { "productId": "1", "name": "a", "price": 1, "quantity": 2 },
        ]);
        let zero = json!([{ "productId": "1", "name": "a", "price": 1, "quantity": 0 }]);

        assert!(serde_json::from_value::<Cart>(duplicate).is_err());
        assert!(serde_json::from_value::<Cart>(zero).is_err());
    }
}
