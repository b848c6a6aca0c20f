//! Borrow and return endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::borrow::BorrowRecord,
};

use super::auth::MessageResponse;

/// A record identifier that arrives as either a JSON number or a numeric
/// string. The historical front-end sends ids lifted from DOM attributes, so
/// `{"bookId": "7"}` and `{"bookId": 7}` must both parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(i32),
    Text(String),
}

impl IdValue {
    fn as_id(&self) -> AppResult<i32> {
        match self {
            IdValue::Number(n) => Ok(*n),
            IdValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| AppError::Validation(format!("Invalid id: {}", s))),
        }
    }
}

/// Borrow request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    #[schema(value_type = i32)]
    pub book_id: IdValue,
    #[schema(value_type = i32)]
    pub user_id: IdValue,
}

/// Return request
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    #[schema(value_type = i32)]
    pub book_id: IdValue,
}

/// Borrow a book
#[utoipa::path(
    post,
    path = "/api/borrow",
    tag = "lending",
    request_body = BorrowRequest,
    responses(
        (status = 200, description = "Book borrowed", body = MessageResponse),
        (status = 400, description = "Book is already borrowed"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn borrow_book(
    State(state): State<crate::AppState>,
    Json(request): Json<BorrowRequest>,
) -> AppResult<Json<MessageResponse>> {
    let book_id = request.book_id.as_id()?;
    let user_id = request.user_id.as_id()?;

    state.services.lending.borrow(book_id, user_id).await?;

    Ok(Json(MessageResponse {
        message: "Book borrowed successfully".to_string(),
    }))
}

/// Return a book
#[utoipa::path(
    post,
    path = "/api/return",
    tag = "lending",
    request_body = ReturnRequest,
    responses(
        (status = 200, description = "Book returned", body = MessageResponse),
        (status = 400, description = "Book is already returned"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Json(request): Json<ReturnRequest>,
) -> AppResult<Json<MessageResponse>> {
    let book_id = request.book_id.as_id()?;

    state.services.lending.return_book(book_id).await?;

    Ok(Json(MessageResponse {
        message: "Book returned successfully".to_string(),
    }))
}

/// Borrow history for a book, newest first
#[utoipa::path(
    get,
    path = "/api/books/{id}/history",
    tag = "lending",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Borrow events for the book", body = Vec<BorrowRecord>),
        (status = 404, description = "Book not found")
    )
)]
pub async fn borrow_history(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    let records = state.services.lending.history(id).await?;
    Ok(Json(records))
}
