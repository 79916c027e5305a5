//! # Session Repository
//!
//! Database operations for bearer-token login sessions. Tokens are opaque
//! random strings resolved through a unique index; expired rows are deleted
//! on sight during resolution and in bulk by `cleanup_expired`.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use rand::RngCore;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::models::session::{self, Entity as Session, Model};
use crate::models::user;

/// Mint an opaque bearer token from 32 bytes of OS randomness.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Build the row for a fresh login session.
///
/// Kept separate from [`SessionRepository::issue`] so registration can insert
/// the session inside its finalization transaction.
pub fn new_session(user: &user::Model, ttl_hours: i64) -> session::ActiveModel {
    let now = Utc::now();
    session::ActiveModel {
        id: Set(Uuid::new_v4()),
        token: Set(generate_token()),
        user_id: Set(user.id),
        role: Set(user.role.clone()),
        company_id: Set(user.company_id),
        issued_at: Set(now),
        expires_at: Set(now + Duration::hours(ttl_hours)),
    }
}

/// Insert a login session row on any connection, including a transaction.
pub async fn insert_session<C: ConnectionTrait>(
    conn: &C,
    session: session::ActiveModel,
) -> Result<Model, sea_orm::DbErr> {
    session.insert(conn).await
}

/// Repository for login session database operations
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    /// Create a new SessionRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issue a fresh session for a user
    pub async fn issue(&self, user: &user::Model, ttl_hours: i64) -> Result<Model, sea_orm::DbErr> {
        insert_session(self.db, new_session(user, ttl_hours)).await
    }

    /// Resolve a bearer token to its session, deleting it if expired
    pub async fn resolve(&self, token: &str) -> Result<Option<Model>, sea_orm::DbErr> {
        let Some(found) = Session::find()
            .filter(session::Column::Token.eq(token))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if found.expires_at <= Utc::now() {
            found.delete(self.db).await?;
            return Ok(None);
        }

        Ok(Some(found))
    }

    /// Invalidate a session by token, returning whether one existed
    pub async fn revoke(&self, token: &str) -> Result<bool, sea_orm::DbErr> {
        let result = Session::delete_many()
            .filter(session::Column::Token.eq(token))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Delete expired sessions, returning the number removed
    pub async fn cleanup_expired(&self) -> Result<u64, sea_orm::DbErr> {
        let result = Session::delete_many()
            .filter(session::Column::ExpiresAt.lte(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
