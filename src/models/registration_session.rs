//! Registration session entity model
//!
//! Ephemeral server-side state for the multi-step signup flow. The session is
//! authoritative: client-held form state is a disposable draft that gets
//! revalidated on every step submission. Rows expire after a TTL and are
//! cleaned opportunistically.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Step cursor for the signup state machine. Steps must be applied in this
/// order; an out-of-order submission is rejected without mutating anything.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    #[sea_orm(string_value = "company_info")]
    CompanyInfo,
    #[sea_orm(string_value = "plan_selection")]
    PlanSelection,
    #[sea_orm(string_value = "employee_count")]
    EmployeeCount,
    #[sea_orm(string_value = "payment")]
    Payment,
    #[sea_orm(string_value = "complete")]
    Complete,
}

impl RegistrationStep {
    /// Wire name of the step, as stored and as rendered in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyInfo => "company_info",
            Self::PlanSelection => "plan_selection",
            Self::EmployeeCount => "employee_count",
            Self::Payment => "payment",
            Self::Complete => "complete",
        }
    }
}

/// Registration session entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "registration_sessions")]
pub struct Model {
    /// Session identifier returned to the caller at step 1 (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Company name submitted at step 1
    pub company_name: String,

    /// Admin display name submitted at step 1
    pub admin_name: String,

    /// Admin email, checked for global uniqueness
    pub email: String,

    /// Company phone, checked for global uniqueness
    pub phone: String,

    /// Argon2id hash of the admin password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Selected plan, set at step 2
    pub plan_id: Option<Uuid>,

    /// Declared employee count, set at step 3
    pub employee_count: Option<i32>,

    /// Step cursor; the next step the caller is expected to submit
    pub step: RegistrationStep,

    /// Abandonment deadline
    pub expires_at: chrono::DateTime<chrono::Utc>,

    /// When the session was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// When the session was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
