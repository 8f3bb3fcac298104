//! Database operations for the storefront schema.
//!
//! # Tables
//!
//! - `users` - Storefront accounts (email login, mandatory username)
//! - `providers` - Product suppliers
//! - `categories` - Product categories
//! - `products` - Catalog entries
//! - `cart_items` - Per-user cart lines with price snapshots
//! - `orders` - Placed orders
//! - `order_items` - Historical order lines with name/price snapshots
//!
//! # Migrations
//!
//! Migrations are stored in `crates/schema/migrations/`, embedded at compile
//! time, and applied with [`run_migrations`].
//!
//! All referential actions (cascade and set-null deletes) live in the SQL
//! schema; `SQLite` enforces them because every connection opens with foreign
//! keys enabled.

pub mod cart_items;
pub mod categories;
pub mod orders;
pub mod products;
pub mod providers;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use cart_items::CartItemRepository;
pub use categories::CategoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use providers::ProviderRepository;
pub use users::UserRepository;

use crate::config::DatabaseConfig;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx. Foreign-key integrity failures surface here.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Uniqueness violation (e.g., email, username, slug).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A CHECK constraint rejected the write (e.g., negative stock).
    #[error("invalid value: {0}")]
    Invalid(String),
}

/// Map a write-path sqlx error onto the repository taxonomy.
///
/// Unique violations become [`RepositoryError::Conflict`] and CHECK
/// violations become [`RepositoryError::Invalid`]; everything else, including
/// foreign-key failures, stays a [`RepositoryError::Database`].
pub(crate) fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_owned());
        }
        if db_err.is_check_violation() {
            return RepositoryError::Invalid(db_err.message().to_owned());
        }
    }
    RepositoryError::Database(e)
}

/// Map a read-path sqlx error onto the repository taxonomy.
///
/// A column that fails decoding (a stored value no longer parseable as its
/// domain type) becomes [`RepositoryError::DataCorruption`]; everything else
/// stays a [`RepositoryError::Database`].
pub(crate) fn map_read_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::ColumnDecode { index, source } => {
            RepositoryError::DataCorruption(format!("invalid value in column {index}: {source}"))
        }
        other => RepositoryError::Database(other),
    }
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// Foreign-key enforcement is switched on for every connection; the cascade
/// and set-null rules in the schema depend on it.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(config.url.expose_secret())?
        .create_if_missing(true)
        .foreign_keys(true);

    tracing::info!(
        max_connections = config.max_connections,
        "connecting to database"
    );

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Apply all pending schema migrations.
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails or the
/// migration history is inconsistent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("running schema migrations");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("schema migrations complete");
    Ok(())
}
