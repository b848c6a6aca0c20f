//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, health, lending};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library lending service REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Lending
        lending::borrow_book,
        lending::return_book,
        lending::borrow_history,
    ),
    components(
        schemas(
            // Auth
            auth::LoginResponse,
            auth::MessageResponse,
            crate::models::user::User,
            crate::models::user::RegisterUser,
            crate::models::user::Credentials,
            // Books
            crate::models::book::Book,
            crate::models::book::BookInput,
            // Lending
            lending::BorrowRequest,
            lending::ReturnRequest,
            crate::models::borrow::BorrowRecord,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and session endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "lending", description = "Borrow and return operations")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
