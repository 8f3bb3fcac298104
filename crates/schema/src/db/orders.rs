//! Order repository for database operations.
//!
//! Order creation is transactional: the order row and all of its line items
//! land together or not at all.

use sqlx::SqlitePool;

use tangelo_core::{OrderId, UserId};

use super::{RepositoryError, map_read_error, map_write_error};
use crate::models::{NewOrder, Order, OrderItem};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an order with its line items in one transaction.
    ///
    /// Line items carry their own `product_name`/`price` snapshots; the
    /// stored `total_amount` is taken from the caller as-is.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Invalid` if a CHECK constraint rejects a
    /// field (empty address, non-positive amount).
    /// Returns `RepositoryError::Database` for other errors, including a
    /// user or product reference to a missing row.
    pub async fn create(&self, new: &NewOrder) -> Result<Order, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let order = sqlx::query_as::<_, Order>(
            r"
            INSERT INTO orders (user_id, total_amount, address, payment_method)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, user_id, total_amount, address, payment_method, created_at
            ",
        )
        .bind(new.user_id)
        .bind(new.total_amount)
        .bind(&new.address)
        .bind(&new.payment_method)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        for item in &new.items {
            sqlx::query(
                r"
                INSERT INTO order_items (order_id, product_id, product_name, price, amount)
                VALUES (?1, ?2, ?3, ?4, ?5)
                ",
            )
            .bind(order.id)
            .bind(item.product_id)
            .bind(&item.product_name)
            .bind(item.price)
            .bind(item.amount)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        }

        tx.commit().await?;

        Ok(order)
    }

    /// Get an order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored total is invalid.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let order = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, total_amount, address, payment_method, created_at
            FROM orders
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(order)
    }

    /// Get the line items of an order, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price or amount
    /// is invalid.
    pub async fn items(&self, order_id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItem>(
            r"
            SELECT id, order_id, product_id, product_name, price, amount
            FROM order_items
            WHERE order_id = ?1
            ORDER BY id
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(items)
    }

    /// List a user's orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored total is invalid.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let orders = sqlx::query_as::<_, Order>(
            r"
            SELECT id, user_id, total_amount, address, payment_method, created_at
            FROM orders
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(orders)
    }

    /// Delete an order and its line items.
    ///
    /// # Returns
    ///
    /// Returns `true` if the order was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
