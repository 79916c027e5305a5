//! # User Repository
//!
//! Database operations for user accounts.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::models::user::{self, ActiveModel, Entity as User, Model};

/// Repository for User database operations
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get an account by ID
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<Model>, sea_orm::DbErr> {
        User::find_by_id(user_id).one(self.db).await
    }

    /// Get an account by login email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Model>, sea_orm::DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Check whether an account already uses the given email
    pub async fn email_exists(&self, email: &str) -> Result<bool, sea_orm::DbErr> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    /// Insert a new account
    pub async fn create(&self, user: ActiveModel) -> Result<Model, sea_orm::DbErr> {
        user.insert(self.db).await
    }
}
