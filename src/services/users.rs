//! Registration and authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::user::{RegisterUser, User},
    repository::Repository,
};

const DEFAULT_ROLE: &str = "member";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new user.
    ///
    /// A duplicate email is reported as a distinguished conflict rather than
    /// surfacing the unique-constraint violation as a generic store failure.
    pub async fn register(&self, request: RegisterUser) -> AppResult<User> {
        if request.username.trim().is_empty()
            || request.email.trim().is_empty()
            || request.password.is_empty()
        {
            return Err(AppError::Validation(
                "Username, email and password are required".to_string(),
            ));
        }

        if self.repository.users.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let hash = self.hash_password(&request.password)?;
        let role = request.role.as_deref().unwrap_or(DEFAULT_ROLE);

        self.repository
            .users
            .create(&request.username, &request.email, &hash, role)
            .await
    }

    /// Authenticate by email and password.
    ///
    /// Unknown email and wrong password produce the same error so the
    /// response never reveals whether an account exists.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::Unauthenticated("Invalid email or password".to_string())
            })?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Unauthenticated(
                "Invalid email or password".to_string(),
            ));
        }

        Ok(user)
    }

    /// Verify a plaintext password against the stored hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
