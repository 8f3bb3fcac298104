//! Product repository for database operations.

use sqlx::SqlitePool;

use tangelo_core::{CategoryId, Price, ProductId, Slug};

use super::{RepositoryError, map_read_error, map_write_error};
use crate::models::{NewProduct, Product};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the slug is taken.
    /// Returns `RepositoryError::Invalid` if stock is negative or a text
    /// field fails its length check.
    /// Returns `RepositoryError::Database` for other errors, including a
    /// `category_id`/`provider_id` that references no row.
    pub async fn create(&self, new: &NewProduct) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(
            r"
            INSERT INTO products
                (name, slug, description, price, stock, image_url, category_id, provider_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            RETURNING id, name, slug, description, price, stock, image_url,
                      created_at, category_id, provider_id
            ",
        )
        .bind(&new.name)
        .bind(&new.slug)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.stock)
        .bind(&new.image_url)
        .bind(new.category_id)
        .bind(new.provider_id)
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price or slug is
    /// invalid.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, slug, description, price, stock, image_url,
                   created_at, category_id, provider_id
            FROM products
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(product)
    }

    /// Get a product by its unique slug.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price or slug is
    /// invalid.
    pub async fn get_by_slug(&self, slug: &Slug) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, slug, description, price, stock, image_url,
                   created_at, category_id, provider_id
            FROM products
            WHERE slug = ?1
            ",
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(product)
    }

    /// List the products in a category, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price or slug is
    /// invalid.
    pub async fn list_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            r"
            SELECT id, name, slug, description, price, stock, image_url,
                   created_at, category_id, provider_id
            FROM products
            WHERE category_id = ?1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(category_id)
        .fetch_all(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(products)
    }

    /// Change a product's live price. Snapshots already taken by cart items
    /// and order items are untouched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_price(&self, id: ProductId, price: Price) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET price = ?1 WHERE id = ?2")
            .bind(price)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Adjust stock by `delta` (positive restocks, negative consumes).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Invalid` if the adjustment would take stock
    /// below zero.
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn adjust_stock(&self, id: ProductId, delta: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET stock = stock + ?1 WHERE id = ?2")
            .bind(delta)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product. Cart items referencing it are removed; order items
    /// keep their snapshots and null the product reference.
    ///
    /// # Returns
    ///
    /// Returns `true` if the product was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
