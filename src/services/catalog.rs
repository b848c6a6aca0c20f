//! Catalog service: book CRUD with input validation

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

/// Require both title and author to be present and non-blank.
fn validate_input(input: &BookInput) -> AppResult<(&str, &str)> {
    match (input.title.as_deref(), input.author.as_deref()) {
        (Some(title), Some(author))
            if !title.trim().is_empty() && !author.trim().is_empty() =>
        {
            Ok((title, author))
        }
        _ => Err(AppError::Validation(
            "Title and author are required".to_string(),
        )),
    }
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    pub async fn create_book(&self, input: BookInput) -> AppResult<Book> {
        let (title, author) = validate_input(&input)?;
        self.repository.books.create(title, author).await
    }

    pub async fn update_book(&self, id: i32, input: BookInput) -> AppResult<Book> {
        let (title, author) = validate_input(&input)?;
        self.repository.books.update(id, title, author).await
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books.delete(id).await
    }
}
