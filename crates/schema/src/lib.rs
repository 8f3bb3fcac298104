//! Tangelo Schema - relational schema and repositories for the storefront.
//!
//! Seven tables back a basic e-commerce storefront: users, providers,
//! categories, products, cart items, orders, and order line items. This crate
//! declares their shapes (embedded `SQLite` migrations), exposes domain model
//! types, and provides one repository per aggregate for create/read/update/
//! delete against a pooled connection.
//!
//! The only non-trivial behavioral contracts are the referential actions:
//!
//! - Deleting a user cascades to their cart items and orders.
//! - Deleting a category cascades to its products.
//! - Deleting a product cascades to cart items but only nulls the product
//!   reference on order items, preserving their name/price snapshots.
//! - Deleting a provider nulls the provider reference on its products.
//!
//! Everything else (workflow, payment, auth) belongs to the surrounding
//! application layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use tangelo_schema::config::DatabaseConfig;
//! use tangelo_schema::db::{self, CategoryRepository};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = db::create_pool(&DatabaseConfig::in_memory()).await?;
//! db::run_migrations(&pool).await?;
//!
//! let categories = CategoryRepository::new(&pool);
//! let electronics = categories.create("Electronics").await?;
//! println!("created category #{}", electronics.id);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use db::RepositoryError;
