//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A registered library user.
///
/// The stored password hash never leaves the server: it is skipped during
/// serialization so the registration and login responses carry the user
/// record without the secret.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    #[schema(write_only)]
    pub password: String,
    pub role: String,
}

/// Registration request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role tag; defaults to "member" when absent
    pub role: Option<String>,
}

/// Login request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
