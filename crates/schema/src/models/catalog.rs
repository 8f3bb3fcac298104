//! Catalog domain types: providers, categories, products.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use tangelo_core::{CategoryId, Email, Price, ProductId, ProviderId, Slug};

/// A product supplier.
///
/// Providers are contact records; nothing beyond field presence is enforced.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub phone: String,
    pub email: Email,
    pub address: String,
}

/// Fields for creating a [`Provider`].
#[derive(Debug, Clone)]
pub struct NewProvider {
    pub name: String,
    pub phone: String,
    pub email: Email,
    pub address: String,
}

/// A product category.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A catalog product.
///
/// Belongs to exactly one category (deleting the category deletes the
/// product) and optionally one provider (deleting the provider nulls
/// `provider_id`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unique URL-safe identifier.
    pub slug: Slug,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Current price. Carts and orders snapshot this at write time.
    pub price: Price,
    /// Units on hand, never negative.
    pub stock: i64,
    /// URL of the product image.
    pub image_url: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// Owning category.
    pub category_id: CategoryId,
    /// Optional supplier.
    pub provider_id: Option<ProviderId>,
}

/// Fields for creating a [`Product`].
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub slug: Slug,
    pub description: Option<String>,
    pub price: Price,
    pub stock: i64,
    pub image_url: String,
    pub category_id: CategoryId,
    pub provider_id: Option<ProviderId>,
}
