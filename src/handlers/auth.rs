//! # Auth API Handlers
//!
//! Login and logout endpoints for bearer-session authentication.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{CurrentUser, extract_bearer_token};
use crate::handlers::ApiJson;
use crate::error::{ApiError, forbidden, unauthorized};
use crate::models::user::{self, UserRole, UserStatus};
use crate::password::verify_password;
use crate::repositories::{SessionRepository, UserRepository};
use crate::server::AppState;

/// Request payload for login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Account email
    #[schema(example = "admin@acme.example")]
    pub email: String,
    /// Account password
    pub password: String,
}

/// Public view of a user account
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub company_id: Option<Uuid>,
}

impl From<user::Model> for UserDto {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            company_id: user.company_id,
        }
    }
}

/// Response payload for a successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    /// Opaque bearer token for subsequent requests
    pub token: String,
    pub user: UserDto,
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponseDto),
        (status = 401, description = "Invalid credentials", body = ApiError),
        (status = 403, description = "Account disabled", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequestDto>,
) -> Result<Json<LoginResponseDto>, ApiError> {
    let user = UserRepository::new(&state.db)
        .find_by_email(request.email.trim())
        .await?
        .ok_or_else(|| unauthorized(Some("Invalid email or password")))?;

    verify_password(&request.password, &user.password_hash)?;

    if user.status != UserStatus::Active {
        return Err(forbidden(Some("Account is disabled")));
    }

    let session = SessionRepository::new(&state.db)
        .issue(&user, state.config.session_ttl_hours as i64)
        .await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponseDto {
        token: session.token,
        user: user.into(),
    }))
}

/// Invalidate the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Session invalidated"),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError)
    ),
    tag = "auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    current_user: CurrentUser,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    // The middleware already validated the header; this re-read only recovers
    // the raw token string.
    let token = extract_bearer_token(&headers)?;
    SessionRepository::new(&state.db).revoke(token).await?;

    tracing::info!(user_id = %current_user.user_id, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}
