//! Domain model types for the storefront schema.
//!
//! Each persisted entity has a row type deriving `sqlx::FromRow` plus a
//! `New*` input type carrying the caller-supplied fields. IDs and timestamps
//! are assigned by the database.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod user;

pub use cart::{CartItem, NewCartItem};
pub use catalog::{Category, NewProduct, NewProvider, Product, Provider};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem};
pub use user::{NewUser, User};
