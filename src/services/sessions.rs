//! Session service: opaque bearer tokens mapped to authenticated identities.
//!
//! Sessions live in a keyed store behind the [`SessionBackend`] trait; the
//! in-memory implementation backs tests and single-node deployments, and a
//! shared backend (Redis, database) can be swapped in without touching the
//! handlers. Session identity is always resolved per request from the
//! presented token, never kept as ambient state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};

/// Identity bound to a session token
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i32,
    pub email: String,
    pub role: String,
}

/// A live session entry
#[derive(Debug, Clone)]
pub struct Session {
    pub user: SessionUser,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Keyed session storage
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn insert(&self, token: &str, session: Session) -> AppResult<()>;
    async fn get(&self, token: &str) -> AppResult<Option<Session>>;
    async fn remove(&self, token: &str) -> AppResult<()>;
}

/// In-memory session backend
#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<HashMap<String, Session>>,
}

#[async_trait]
impl SessionBackend for MemorySessionStore {
    async fn insert(&self, token: &str, session: Session) -> AppResult<()> {
        let mut inner = self.inner.write().await;
        // Abandoned tokens are only noticed when presented, so sweep the
        // expired ones here to keep the map from growing without bound.
        inner.retain(|_, s| !s.is_expired());
        inner.insert(token.to_string(), session);
        Ok(())
    }

    async fn get(&self, token: &str) -> AppResult<Option<Session>> {
        Ok(self.inner.read().await.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> AppResult<()> {
        self.inner.write().await.remove(token);
        Ok(())
    }
}

const TOKEN_LENGTH: usize = 48;

#[derive(Clone)]
pub struct SessionService {
    backend: Arc<dyn SessionBackend>,
    ttl: Duration,
}

impl SessionService {
    pub fn new(backend: Arc<dyn SessionBackend>, ttl: Duration) -> Self {
        Self { backend, ttl }
    }

    /// Create a session for an authenticated user and return its token
    pub async fn create(&self, user: SessionUser) -> AppResult<String> {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let session = Session {
            user,
            created_at: Instant::now(),
            ttl: self.ttl,
        };

        self.backend.insert(&token, session).await?;

        Ok(token)
    }

    /// Resolve a token to its identity; expired sessions are evicted lazily
    pub async fn resolve(&self, token: &str) -> AppResult<Option<SessionUser>> {
        match self.backend.get(token).await? {
            Some(session) if session.is_expired() => {
                self.backend.remove(token).await?;
                Ok(None)
            }
            Some(session) => Ok(Some(session.user)),
            None => Ok(None),
        }
    }

    /// Destroy a session (logout)
    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        self.backend
            .remove(token)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to destroy session: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(ttl: Duration) -> SessionService {
        SessionService::new(Arc::new(MemorySessionStore::default()), ttl)
    }

    fn reader() -> SessionUser {
        SessionUser {
            user_id: 1,
            email: "reader@example.org".to_string(),
            role: "member".to_string(),
        }
    }

    #[tokio::test]
    async fn created_session_resolves_to_its_user() {
        let sessions = service(Duration::from_secs(60));

        let token = sessions.create(reader()).await.unwrap();
        let user = sessions.resolve(&token).await.unwrap().unwrap();

        assert_eq!(user.user_id, 1);
        assert_eq!(user.email, "reader@example.org");
    }

    #[tokio::test]
    async fn tokens_are_unique_per_session() {
        let sessions = service(Duration::from_secs(60));

        let first = sessions.create(reader()).await.unwrap();
        let second = sessions.create(reader()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.len(), TOKEN_LENGTH);
    }

    #[tokio::test]
    async fn unknown_token_resolves_to_none() {
        let sessions = service(Duration::from_secs(60));

        assert!(sessions.resolve("no-such-token").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn destroyed_session_no_longer_resolves() {
        let sessions = service(Duration::from_secs(60));

        let token = sessions.create(reader()).await.unwrap();
        sessions.destroy(&token).await.unwrap();

        assert!(sessions.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_session_is_evicted() {
        let sessions = service(Duration::ZERO);

        let token = sessions.create(reader()).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(sessions.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_sweeps_expired_entries() {
        let store = MemorySessionStore::default();

        store
            .insert(
                "stale",
                Session {
                    user: reader(),
                    created_at: Instant::now() - Duration::from_secs(5),
                    ttl: Duration::from_secs(1),
                },
            )
            .await
            .unwrap();
        store
            .insert(
                "fresh",
                Session {
                    user: reader(),
                    created_at: Instant::now(),
                    ttl: Duration::from_secs(60),
                },
            )
            .await
            .unwrap();

        assert!(store.get("stale").await.unwrap().is_none());
        assert!(store.get("fresh").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn destroy_is_idempotent() {
        let sessions = service(Duration::from_secs(60));

        let token = sessions.create(reader()).await.unwrap();
        sessions.destroy(&token).await.unwrap();
        sessions.destroy(&token).await.unwrap();
    }
}
