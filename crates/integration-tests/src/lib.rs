//! Integration test support for the Tangelo schema.
//!
//! Every test gets its own in-memory `SQLite` database with foreign keys
//! enabled and all migrations applied, so cascade and set-null behavior is
//! exercised for real.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tangelo-integration-tests
//! ```

use sqlx::SqlitePool;

use tangelo_core::{CategoryId, Email, Slug};
use tangelo_schema::config::DatabaseConfig;
use tangelo_schema::db::{self, CategoryRepository, ProductRepository, UserRepository};
use tangelo_schema::models::{Category, NewProduct, NewUser, Product, User};

/// Create a fresh, fully migrated in-memory database.
///
/// # Panics
///
/// Panics if the pool cannot be created or a migration fails; tests cannot
/// proceed without a database.
pub async fn test_pool() -> SqlitePool {
    let pool = db::create_pool(&DatabaseConfig::in_memory())
        .await
        .expect("failed to create in-memory pool");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Seed a user; `tag` keeps usernames and emails unique within a test.
///
/// # Panics
///
/// Panics on any repository error.
pub async fn seed_user(pool: &SqlitePool, tag: &str) -> User {
    UserRepository::new(pool)
        .create(&NewUser {
            username: format!("user-{tag}"),
            full_name: format!("Test User {tag}"),
            email: Email::parse(&format!("{tag}@example.com")).expect("valid email"),
        })
        .await
        .expect("failed to seed user")
}

/// Seed a category.
///
/// # Panics
///
/// Panics on any repository error.
pub async fn seed_category(pool: &SqlitePool, name: &str) -> Category {
    CategoryRepository::new(pool)
        .create(name)
        .await
        .expect("failed to seed category")
}

/// Seed a product in `category_id` with the given name, price, and stock.
/// The slug is derived from the name.
///
/// # Panics
///
/// Panics on any repository error.
pub async fn seed_product(
    pool: &SqlitePool,
    category_id: CategoryId,
    name: &str,
    price: &str,
    stock: i64,
) -> Product {
    ProductRepository::new(pool)
        .create(&NewProduct {
            name: name.to_owned(),
            slug: Slug::slugify(name).expect("sluggable name"),
            description: None,
            price: price.parse().expect("valid price"),
            stock,
            image_url: format!("https://img.example.com/{name}.jpg"),
            category_id,
            provider_id: None,
        })
        .await
        .expect("failed to seed product")
}
