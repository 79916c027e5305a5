//! # Plan Repository
//!
//! Database operations for subscription plans.

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder};
use uuid::Uuid;

use crate::models::plan::{self, ActiveModel, Entity as Plan, Model};

/// Repository for Plan database operations
pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    /// Create a new PlanRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a plan by ID
    pub async fn find_by_id(&self, plan_id: Uuid) -> Result<Option<Model>, sea_orm::DbErr> {
        Plan::find_by_id(plan_id).one(self.db).await
    }

    /// Get a plan by its unique machine name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Model>, sea_orm::DbErr> {
        Plan::find()
            .filter(plan::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// List plans selectable by new registrations, cheapest first
    pub async fn list_active(&self) -> Result<Vec<Model>, sea_orm::DbErr> {
        Plan::find()
            .filter(plan::Column::IsActive.eq(true))
            .order_by_asc(plan::Column::Price)
            .all(self.db)
            .await
    }

    /// Insert a new plan
    pub async fn create(&self, plan: ActiveModel) -> Result<Model, sea_orm::DbErr> {
        plan.insert(self.db).await
    }
}
