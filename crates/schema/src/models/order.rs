//! Order domain types.
//!
//! Orders are historical records: line items snapshot the product name and
//! price at purchase time, so later catalog edits or deletions leave order
//! history intact.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use tangelo_core::{OrderId, OrderItemId, Price, ProductId, Quantity, UserId};

use super::Product;

/// A placed order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// User who placed the order. Deleting the user deletes the order.
    pub user_id: UserId,
    /// Caller-supplied total. Not checked against the line-item sum; see
    /// [`NewOrder::items_total`] for callers that want that invariant.
    pub total_amount: Price,
    /// Shipping address.
    pub address: String,
    /// Free-form payment method label (e.g. "card", "cash on delivery").
    pub payment_method: String,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
}

/// A line on a placed order.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    /// Live product reference, nulled if the product is deleted.
    pub product_id: Option<ProductId>,
    /// Product name at purchase time.
    pub product_name: String,
    /// Price at purchase time.
    pub price: Price,
    pub amount: Quantity,
}

impl OrderItem {
    /// Extended amount for this line (`price * amount`).
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.times(self.amount)
    }
}

/// Fields for creating an [`Order`] together with its line items.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_amount: Price,
    pub address: String,
    pub payment_method: String,
    pub items: Vec<NewOrderItem>,
}

impl NewOrder {
    /// Sum of the line-item subtotals.
    ///
    /// The schema stores `total_amount` as given and never compares it to
    /// this sum; callers that want the two to agree compute it here.
    #[must_use]
    pub fn items_total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| item.price.times(item.amount))
            .sum()
    }
}

/// Fields for one line of a [`NewOrder`].
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub price: Price,
    pub amount: Quantity,
}

impl NewOrderItem {
    /// Build a line for `product`, snapshotting its current name and price.
    #[must_use]
    pub fn of_product(product: &Product, amount: Quantity) -> Self {
        Self {
            product_id: Some(product.id),
            product_name: product.name.clone(),
            price: product.price,
            amount,
        }
    }
}
