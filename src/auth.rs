//! # Authentication and Authorization
//!
//! This module provides bearer-session authentication and role-scoped
//! authorization for protected API endpoints. Tokens are opaque strings
//! resolved against the sessions table; the resolved identity is placed in
//! request extensions for extractors to pick up.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ApiError, forbidden, unauthorized};
use crate::models::user::{UserRole, UserStatus};
use crate::repositories::{SessionRepository, UserRepository};
use crate::server::AppState;

/// Authenticated identity resolved from a bearer session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    /// Tenant the user belongs to. `None` for super admins.
    pub company_id: Option<Uuid>,
}

impl CurrentUser {
    /// Check that this user may act on the given tenant's resources.
    ///
    /// Super admins pass for any tenant; everyone else only for their own.
    pub fn ensure_company_scope(&self, company_id: Uuid) -> Result<(), ApiError> {
        if self.role == UserRole::SuperAdmin {
            return Ok(());
        }
        if self.company_id == Some(company_id) {
            return Ok(());
        }
        Err(forbidden(Some(
            "You do not have access to this company's resources",
        )))
    }
}

/// Extractor that requires a super admin session
#[derive(Debug, Clone)]
pub struct SuperAdmin(pub CurrentUser);

/// Extractor that requires a company admin or super admin session
#[derive(Debug, Clone)]
pub struct CompanyAdmin(pub CurrentUser);

/// Authentication middleware that resolves bearer tokens to user identities
pub async fn auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())?;

    let session = SessionRepository::new(&state.db)
        .resolve(token)
        .await?
        .ok_or_else(|| unauthorized(Some("Invalid or expired session")))?;

    let user = UserRepository::new(&state.db)
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(|| unauthorized(Some("Invalid or expired session")))?;

    if user.status != UserStatus::Active {
        return Err(forbidden(Some("Account is disabled")));
    }

    tracing::debug!(user_id = %user.id, role = ?user.role, "Authenticated request");

    let mut request = request;
    request.extensions_mut().insert(CurrentUser {
        user_id: user.id,
        email: user.email,
        name: user.name,
        role: user.role,
        company_id: user.company_id,
    });

    Ok(next.run(request).await)
}

pub(crate) fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized(Some("Missing Authorization header")))
        .and_then(|value| {
            value
                .to_str()
                .map_err(|_| unauthorized(Some("Invalid Authorization header")))
        })
        .and_then(|header| {
            header
                .strip_prefix("Bearer ")
                .ok_or_else(|| unauthorized(Some("Authorization header must use Bearer scheme")))
        })
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| unauthorized(Some("Authentication required")))
    }
}

impl<S> FromRequestParts<S> for SuperAdmin
where
    S: Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != UserRole::SuperAdmin {
            return Err(forbidden(Some("Super admin access required")));
        }
        Ok(SuperAdmin(user))
    }
}

impl<S> FromRequestParts<S> for CompanyAdmin
where
    S: Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        match user.role {
            UserRole::SuperAdmin | UserRole::CompanyAdmin => Ok(CompanyAdmin(user)),
            UserRole::Employee => Err(forbidden(Some("Company admin access required"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::{Duration, Utc};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::models::{session, user};

    async fn test_state() -> AppState {
        let db: DatabaseConnection = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&db, None).await.expect("Migration failed");
        AppState {
            config: Arc::new(AppConfig::default()),
            db,
        }
    }

    async fn seed_user(
        db: &DatabaseConnection,
        role: UserRole,
        status: UserStatus,
    ) -> user::Model {
        let now = Utc::now();
        user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(format!("{}@example.com", Uuid::new_v4())),
            password_hash: Set("unused".to_string()),
            name: Set("Test User".to_string()),
            role: Set(role),
            company_id: Set(None),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert user")
    }

    async fn seed_session(db: &DatabaseConnection, user: &user::Model, ttl_hours: i64) -> String {
        let now = Utc::now();
        let token = crate::repositories::session::generate_token();
        session::ActiveModel {
            id: Set(Uuid::new_v4()),
            token: Set(token.clone()),
            user_id: Set(user.id),
            role: Set(user.role.clone()),
            company_id: Set(user.company_id),
            issued_at: Set(now),
            expires_at: Set(now + Duration::hours(ttl_hours)),
        }
        .insert(db)
        .await
        .expect("Failed to insert session");
        token
    }

    fn protected_app(state: AppState) -> Router {
        async fn handler(user: CurrentUser) -> String {
            user.email
        }
        async fn admin_handler(_admin: SuperAdmin) -> &'static str {
            "OK"
        }

        Router::new()
            .route("/me", get(handler))
            .route("/admin", get(admin_handler))
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .with_state(state)
    }

    #[tokio::test]
    async fn missing_auth_header_returns_401() {
        let app = protected_app(test_state().await);
        let request = Request::builder().uri("/me").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_scheme_returns_401() {
        let app = protected_app(test_state().await);
        let request = Request::builder()
            .uri("/me")
            .header("Authorization", "Basic dGVzdDoxMjM=")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_token_returns_401() {
        let app = protected_app(test_state().await);
        let request = Request::builder()
            .uri("/me")
            .header("Authorization", "Bearer not-a-real-token")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_returns_401_and_is_deleted() {
        let state = test_state().await;
        let user = seed_user(&state.db, UserRole::CompanyAdmin, UserStatus::Active).await;
        let token = seed_session(&state.db, &user, -1).await;

        let app = protected_app(state.clone());
        let request = Request::builder()
            .uri("/me")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let remaining = SessionRepository::new(&state.db)
            .resolve(&token)
            .await
            .unwrap();
        assert!(remaining.is_none());
    }

    #[tokio::test]
    async fn valid_token_passes_through() {
        let state = test_state().await;
        let user = seed_user(&state.db, UserRole::CompanyAdmin, UserStatus::Active).await;
        let token = seed_session(&state.db, &user, 24).await;

        let app = protected_app(state);
        let request = Request::builder()
            .uri("/me")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn disabled_account_returns_403() {
        let state = test_state().await;
        let user = seed_user(&state.db, UserRole::CompanyAdmin, UserStatus::Inactive).await;
        let token = seed_session(&state.db, &user, 24).await;

        let app = protected_app(state);
        let request = Request::builder()
            .uri("/me")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn company_admin_cannot_reach_super_admin_route() {
        let state = test_state().await;
        let user = seed_user(&state.db, UserRole::CompanyAdmin, UserStatus::Active).await;
        let token = seed_session(&state.db, &user, 24).await;

        let app = protected_app(state);
        let request = Request::builder()
            .uri("/admin")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn super_admin_reaches_super_admin_route() {
        let state = test_state().await;
        let user = seed_user(&state.db, UserRole::SuperAdmin, UserStatus::Active).await;
        let token = seed_session(&state.db, &user, 24).await;

        let app = protected_app(state);
        let request = Request::builder()
            .uri("/admin")
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn company_scope_matrix() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();

        let super_admin = CurrentUser {
            user_id: Uuid::new_v4(),
            email: "root@example.com".to_string(),
            name: "Root".to_string(),
            role: UserRole::SuperAdmin,
            company_id: None,
        };
        assert!(super_admin.ensure_company_scope(own).is_ok());
        assert!(super_admin.ensure_company_scope(other).is_ok());

        let admin = CurrentUser {
            user_id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            role: UserRole::CompanyAdmin,
            company_id: Some(own),
        };
        assert!(admin.ensure_company_scope(own).is_ok());
        let err = admin.ensure_company_scope(other).unwrap_err();
        assert_eq!(err.code, Box::from("FORBIDDEN"));
    }
}
