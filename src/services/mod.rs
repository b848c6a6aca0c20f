//! Business logic services

pub mod catalog;
pub mod lending;
pub mod sessions;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub lending: lending::LendingService,
    pub sessions: sessions::SessionService,
}

impl Services {
    /// Create all services with the given repository and session backend
    pub fn new(
        repository: Repository,
        auth_config: &AuthConfig,
        session_backend: Arc<dyn sessions::SessionBackend>,
    ) -> Self {
        let ttl = Duration::from_secs(auth_config.session_ttl_minutes * 60);

        Self {
            users: users::UsersService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            lending: lending::LendingService::new(repository.clone()),
            sessions: sessions::SessionService::new(session_backend, ttl),
            repository,
        }
    }
}
