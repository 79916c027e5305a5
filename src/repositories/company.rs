//! # Company Repository
//!
//! Database operations for company tenants. Companies are never hard-deleted;
//! lifecycle changes only move the status column.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::models::company::{self, CompanyStatus, Entity as Company, Model, SubdomainStatus};

/// Fields a super admin may change on an existing tenant.
#[derive(Debug, Clone, Default)]
pub struct CompanyAdminUpdate {
    pub status: Option<CompanyStatus>,
    pub plan_id: Option<Uuid>,
    pub max_employees: Option<i32>,
}

/// Repository for Company database operations
pub struct CompanyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRepository<'a> {
    /// Create a new CompanyRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a company by ID
    pub async fn find_by_id(&self, company_id: Uuid) -> Result<Option<Model>, sea_orm::DbErr> {
        Company::find_by_id(company_id).one(self.db).await
    }

    /// List all tenants, newest first
    pub async fn list_all(&self) -> Result<Vec<Model>, sea_orm::DbErr> {
        Company::find()
            .order_by_desc(company::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Check whether a company already uses the given email
    pub async fn email_exists(&self, email: &str) -> Result<bool, sea_orm::DbErr> {
        Ok(Company::find()
            .filter(company::Column::Email.eq(email))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Check whether a company already uses the given phone number
    pub async fn phone_exists(&self, phone: &str) -> Result<bool, sea_orm::DbErr> {
        Ok(Company::find()
            .filter(company::Column::Phone.eq(phone))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Apply a super-admin edit to a tenant
    pub async fn apply_admin_update(
        &self,
        company: Model,
        update: CompanyAdminUpdate,
    ) -> Result<Model, sea_orm::DbErr> {
        let mut active = company.into_active_model();
        if let Some(status) = update.status {
            active.status = Set(status);
        }
        if let Some(plan_id) = update.plan_id {
            active.plan_id = Set(plan_id);
        }
        if let Some(max_employees) = update.max_employees {
            active.max_employees = Set(max_employees);
        }
        active.updated_at = Set(Utc::now());
        active.update(self.db).await
    }

    /// Record a tenant's subdomain request, resetting any prior review outcome
    pub async fn request_subdomain(
        &self,
        company: Model,
        subdomain: String,
    ) -> Result<Model, sea_orm::DbErr> {
        let now = Utc::now();
        let mut active = company.into_active_model();
        active.subdomain = Set(Some(subdomain));
        active.subdomain_status = Set(Some(SubdomainStatus::Pending));
        active.subdomain_requested_at = Set(Some(now));
        active.updated_at = Set(now);
        active.update(self.db).await
    }

    /// List tenants with a subdomain request awaiting review, oldest first
    pub async fn list_pending_subdomain_requests(&self) -> Result<Vec<Model>, sea_orm::DbErr> {
        Company::find()
            .filter(company::Column::SubdomainStatus.eq(SubdomainStatus::Pending))
            .order_by_asc(company::Column::SubdomainRequestedAt)
            .all(self.db)
            .await
    }
}
