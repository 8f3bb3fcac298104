//! Provider repository for database operations.

use sqlx::SqlitePool;

use tangelo_core::ProviderId;

use super::{RepositoryError, map_read_error, map_write_error};
use crate::models::{NewProvider, Provider};

/// Repository for provider database operations.
pub struct ProviderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProviderRepository<'a> {
    /// Create a new provider repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new provider.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Invalid` if a field fails its length check.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, new: &NewProvider) -> Result<Provider, RepositoryError> {
        sqlx::query_as::<_, Provider>(
            r"
            INSERT INTO providers (name, phone, email, address)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, name, phone, email, address
            ",
        )
        .bind(&new.name)
        .bind(&new.phone)
        .bind(&new.email)
        .bind(&new.address)
        .fetch_one(self.pool)
        .await
        .map_err(map_write_error)
    }

    /// Get a provider by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the email in the database
    /// is invalid.
    pub async fn get_by_id(&self, id: ProviderId) -> Result<Option<Provider>, RepositoryError> {
        let provider = sqlx::query_as::<_, Provider>(
            "SELECT id, name, phone, email, address FROM providers WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(provider)
    }

    /// List all providers, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the email in the database
    /// is invalid.
    pub async fn list(&self) -> Result<Vec<Provider>, RepositoryError> {
        let providers = sqlx::query_as::<_, Provider>(
            "SELECT id, name, phone, email, address FROM providers ORDER BY name, id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(map_read_error)?;

        Ok(providers)
    }

    /// Delete a provider. Products that referenced it keep their rows with a
    /// nulled `provider_id`.
    ///
    /// # Returns
    ///
    /// Returns `true` if the provider was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProviderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM providers WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
