//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use tangelo_core::{Email, UserId};

/// A storefront user.
///
/// Login identifier is the email address; the username stays mandatory and
/// unique but is not used for login.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique account name, required but not the login identifier.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Unique email address, used to log in.
    pub email: Email,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user last logged in, if ever.
    pub last_login: Option<DateTime<Utc>>,
    /// Whether the account is active. Defaults to true.
    pub is_active: bool,
}

/// Fields for creating a [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub full_name: String,
    pub email: Email,
}
