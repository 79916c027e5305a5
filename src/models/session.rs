//! Bearer session entity model
//!
//! Sessions are persisted rather than held in process memory so the service
//! stays stateless-process-compatible. Tokens expire after a fixed TTL;
//! expired rows read as absent and are deleted lazily.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Bearer session entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Unique identifier for the session (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Unguessable bearer token, unique
    pub token: String,

    /// Authenticated account
    pub user_id: Uuid,

    /// Role at issue time
    pub role: UserRole,

    /// Company scope; null for super admins
    pub company_id: Option<Uuid>,

    /// When the session was issued
    pub issued_at: chrono::DateTime<chrono::Utc>,

    /// Fixed-TTL expiry
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
