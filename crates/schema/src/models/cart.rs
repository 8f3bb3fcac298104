//! Cart domain types.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use tangelo_core::{CartItemId, Price, ProductId, Quantity, UserId};

use super::Product;

/// A line in a user's cart.
///
/// `price` is a snapshot taken when the item was added; later edits to the
/// product price do not touch it. The row is removed when either its user or
/// its product is deleted.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CartItem {
    pub id: CartItemId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub amount: Quantity,
    pub price: Price,
}

impl CartItem {
    /// Extended amount for this line (`price * amount`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.times(self.amount)
    }
}

/// Fields for adding a [`CartItem`].
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub amount: Quantity,
    /// Price snapshot at add time.
    pub price: Price,
}

impl NewCartItem {
    /// Build a cart line for `product`, snapshotting its current price.
    #[must_use]
    pub fn of_product(user_id: UserId, product: &Product, amount: Quantity) -> Self {
        Self {
            user_id,
            product_id: product.id,
            amount,
            price: product.price,
        }
    }
}
