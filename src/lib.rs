//! Libris Library Lending Service
//!
//! A small Rust web service for managing a book catalog: user registration
//! and login, book CRUD, and borrow/return transitions, with a session gate
//! protecting selected mutating routes.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
