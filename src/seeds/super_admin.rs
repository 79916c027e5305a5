//! Super-admin seeding functionality
//!
//! Creates the platform super-admin account from configuration on first
//! startup. Skipped entirely when the credentials are not configured.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::user::{self, UserRole, UserStatus};
use crate::password::hash_password;
use crate::repositories::UserRepository;

/// Seeds the super-admin account from `WORKFORCE_SUPER_ADMIN_EMAIL` /
/// `WORKFORCE_SUPER_ADMIN_PASSWORD` when both are configured
pub async fn seed_super_admin(db: &DatabaseConnection, config: &AppConfig) -> Result<()> {
    let (Some(email), Some(password)) = (
        config.super_admin_email.as_deref(),
        config.super_admin_password.as_deref(),
    ) else {
        log::info!("Super-admin credentials not configured, skipping seed");
        return Ok(());
    };

    let repo = UserRepository::new(db);
    if repo.find_by_email(email).await?.is_some() {
        log::info!("Super-admin account already exists, skipping");
        return Ok(());
    }

    log::info!("Creating super-admin account: {}", email);
    let password_hash =
        hash_password(password).map_err(|e| anyhow::anyhow!("Failed to hash password: {:?}", e))?;

    let now = Utc::now();
    let admin = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        name: Set("Super Admin".to_string()),
        role: Set(UserRole::SuperAdmin),
        company_id: Set(None),
        status: Set(UserStatus::Active),
        created_at: Set(now),
        updated_at: Set(now),
    };
    repo.create(admin).await?;

    log::info!("Super-admin seeding completed successfully");
    Ok(())
}
