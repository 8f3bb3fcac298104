//! Cart item repository for database operations.

use sqlx::SqlitePool;

use tangelo_core::{CartItemId, UserId};

use super::{RepositoryError, map_read_error, map_write_error};
use crate::models::{CartItem, NewCartItem};

/// Repository for cart item database operations.
pub struct CartItemRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CartItemRepository<'a> {
    /// Create a new cart item repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Add a line to a user's cart. The price on the line is the caller's
    /// snapshot; it stays put when the product price changes later.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the user or product doesn't
    /// exist (foreign-key failure) or for other database errors.
    pub async fn add(&self, new: &NewCartItem) -> Result<CartItem, RepositoryError> {
        sqlx::query_as::<_, CartItem>(
            r"
            INSERT INTO cart_items (user_id, product_id, amount, price)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, user_id, product_id, amount, price
            ",
        )
        .bind(new.user_id)
        .bind(new.product_id)
        .bind(new.amount)
        .bind(new.price)
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)
    }

    /// List a user's cart lines, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price or amount
    /// is invalid.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CartItem>(
            r"
            SELECT id, user_id, product_id, amount, price
            FROM cart_items
            WHERE user_id = ?1
            ORDER BY id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(items)
    }

    /// Remove a single cart line.
    ///
    /// # Returns
    ///
    /// Returns `true` if the line was removed, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(&self, id: CartItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Empty a user's cart.
    ///
    /// # Returns
    ///
    /// The number of lines removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn clear_for_user(&self, user_id: UserId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE user_id = ?1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
