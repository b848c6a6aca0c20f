//! Registration, login and logout endpoints

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{Credentials, RegisterUser, User},
    services::sessions::SessionUser,
};

use super::bearer_token;

/// Login response with the session token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
    /// Opaque session token; send as `Authorization: Bearer <token>`
    pub token: String,
}

/// Plain status message
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.services.users.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(credentials): Json<Credentials>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .services
        .users
        .authenticate(&credentials.email, &credentials.password)
        .await?;

    let token = state
        .services
        .sessions
        .create(SessionUser {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
        token,
    }))
}

/// Log out, destroying the presented session
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageResponse),
        (status = 500, description = "Session store failure")
    )
)]
pub async fn logout(
    State(state): State<crate::AppState>,
    headers: HeaderMap,
) -> AppResult<Json<MessageResponse>> {
    if let Some(token) = bearer_token(&headers) {
        state.services.sessions.destroy(token).await?;
    }

    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
