//! Lending repository: borrow/return transitions and the borrow ledger.
//!
//! Both transitions use a conditional flip of the availability flag so that
//! concurrent requests against the same book cannot both succeed: the UPDATE
//! only matches a row in the expected state, and a zero row count is reported
//! as a conflict. The borrow path wraps the flip and the ledger append in one
//! transaction so a mid-sequence failure cannot leave the flag flipped with
//! no ledger row.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrow::BorrowRecord,
};

#[derive(Clone)]
pub struct LendingRepository {
    pool: Pool<Postgres>,
}

impl LendingRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Borrow a book: flip `available` to false and append a ledger row.
    pub async fn borrow(&self, book_id: i32, user_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        // Conditional flip: matches only while the book is available, so two
        // concurrent borrows cannot both observe rows_affected == 1.
        let flipped = sqlx::query(
            "UPDATE books SET available = FALSE WHERE id = $1 AND available = TRUE",
        )
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if flipped.rows_affected() == 0 {
            return Err(AppError::Conflict("Book is already borrowed".to_string()));
        }

        sqlx::query("INSERT INTO borrowed_books (book_id, user_id) VALUES ($1, $2)")
            .bind(book_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Return a book: flip `available` back to true.
    ///
    /// The ledger row stays open; the ledger is an append-only record of
    /// borrow events from this operation's perspective.
    pub async fn return_book(&self, book_id: i32) -> AppResult<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&self.pool)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Book not found".to_string()));
        }

        let flipped = sqlx::query(
            "UPDATE books SET available = TRUE WHERE id = $1 AND available = FALSE",
        )
        .bind(book_id)
        .execute(&self.pool)
        .await?;

        if flipped.rows_affected() == 0 {
            return Err(AppError::Conflict("Book is already returned".to_string()));
        }

        Ok(())
    }

    /// Ledger rows for one book, newest first
    pub async fn records_for_book(&self, book_id: i32) -> AppResult<Vec<BorrowRecord>> {
        let records = sqlx::query_as::<_, BorrowRecord>(
            "SELECT * FROM borrowed_books WHERE book_id = $1 ORDER BY borrowed_at DESC",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
