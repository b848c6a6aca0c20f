//! Book (catalog) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog entry.
///
/// `available` is true unless exactly one open borrow record references the
/// book; the lending repository maintains this invariant with a conditional
/// flip inside a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub available: bool,
}

/// Create/update request payload for a book
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
}
