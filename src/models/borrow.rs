//! Borrow ledger model

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// One lending event in the append-only ledger.
///
/// Returning a book flips the catalog flag back but does not close the
/// ledger row; the ledger records borrow events only.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub borrowed_at: DateTime<Utc>,
}
