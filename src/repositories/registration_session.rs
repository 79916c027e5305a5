//! # Registration Session Repository
//!
//! Database operations for in-progress company registrations. Rows are
//! ephemeral: each carries an `expires_at` deadline, lookups ignore expired
//! rows and `cleanup_expired` removes them opportunistically.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::models::registration_session::{
    self, Entity as RegistrationSession, Model, RegistrationStep,
};

/// Repository for registration session database operations
pub struct RegistrationSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationSessionRepository<'a> {
    /// Create a new RegistrationSessionRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Start a new registration at the plan selection step
    pub async fn create(
        &self,
        company_name: String,
        admin_name: String,
        email: String,
        phone: String,
        password_hash: String,
        ttl_hours: i64,
    ) -> Result<Model, sea_orm::DbErr> {
        let now = Utc::now();
        let session = registration_session::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_name: Set(company_name),
            admin_name: Set(admin_name),
            email: Set(email),
            phone: Set(phone),
            password_hash: Set(password_hash),
            plan_id: Set(None),
            employee_count: Set(None),
            step: Set(RegistrationStep::PlanSelection),
            expires_at: Set(now + Duration::hours(ttl_hours)),
            created_at: Set(now),
            updated_at: Set(now),
        };
        session.insert(self.db).await
    }

    /// Get a registration by ID, ignoring expired rows
    pub async fn find_live(&self, session_id: Uuid) -> Result<Option<Model>, sea_orm::DbErr> {
        RegistrationSession::find_by_id(session_id)
            .filter(registration_session::Column::ExpiresAt.gt(Utc::now()))
            .one(self.db)
            .await
    }

    /// Record the selected plan and advance to the employee count step
    pub async fn set_plan(&self, session: Model, plan_id: Uuid) -> Result<Model, sea_orm::DbErr> {
        let mut active = session.into_active_model();
        active.plan_id = Set(Some(plan_id));
        active.step = Set(RegistrationStep::EmployeeCount);
        active.updated_at = Set(Utc::now());
        active.update(self.db).await
    }

    /// Record the employee count and advance to the payment step
    pub async fn set_employee_count(
        &self,
        session: Model,
        employee_count: i32,
    ) -> Result<Model, sea_orm::DbErr> {
        let mut active = session.into_active_model();
        active.employee_count = Set(Some(employee_count));
        active.step = Set(RegistrationStep::Payment);
        active.updated_at = Set(Utc::now());
        active.update(self.db).await
    }

    /// Check whether a live, unfinished registration already claims this
    /// email or phone
    pub async fn contact_in_flight(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<Model>, sea_orm::DbErr> {
        RegistrationSession::find()
            .filter(
                Condition::any()
                    .add(registration_session::Column::Email.eq(email))
                    .add(registration_session::Column::Phone.eq(phone)),
            )
            .filter(registration_session::Column::Step.ne(RegistrationStep::Complete))
            .filter(registration_session::Column::ExpiresAt.gt(Utc::now()))
            .one(self.db)
            .await
    }

    /// Delete expired registrations, returning the number removed
    pub async fn cleanup_expired(&self) -> Result<u64, sea_orm::DbErr> {
        let result = RegistrationSession::delete_many()
            .filter(registration_session::Column::ExpiresAt.lte(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
