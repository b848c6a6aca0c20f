//! Lending service: borrow/return transitions

use crate::{
    error::AppResult,
    models::borrow::BorrowRecord,
    repository::Repository,
};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a book for a user
    pub async fn borrow(&self, book_id: i32, user_id: i32) -> AppResult<()> {
        self.repository.lending.borrow(book_id, user_id).await?;
        tracing::info!(book_id, user_id, "book borrowed");
        Ok(())
    }

    /// Return a borrowed book
    pub async fn return_book(&self, book_id: i32) -> AppResult<()> {
        self.repository.lending.return_book(book_id).await?;
        tracing::info!(book_id, "book returned");
        Ok(())
    }

    /// Borrow history for one book
    pub async fn history(&self, book_id: i32) -> AppResult<Vec<BorrowRecord>> {
        // 404 for an unknown book rather than an empty history
        self.repository.books.get_by_id(book_id).await?;
        self.repository.lending.records_for_book(book_id).await
    }
}
