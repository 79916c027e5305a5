//! Subscription plan entity model
//!
//! Plans define price and employee-count entitlements. Prices are integer
//! minor currency units. Activated tenants snapshot the plan ceiling at
//! signup, so plan edits are not retroactive.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Plan entity representing a subscription tier
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plans")]
pub struct Model {
    /// Unique identifier for the plan (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Unique machine name (e.g., "basic")
    pub name: String,

    /// Human-readable name (e.g., "Basic")
    pub display_name: String,

    /// Base price in minor currency units
    pub price: i64,

    /// Subscription duration in months
    pub duration_months: i32,

    /// Number of employees covered by the base price
    pub employees_included: i32,

    /// Surcharge per employee beyond `employees_included`, minor units
    pub price_per_additional_employee: i64,

    /// Hard ceiling on employee count for this plan
    pub max_employees: i32,

    /// Ordered list of capability tags
    #[sea_orm(column_type = "JsonBinary")]
    pub features: JsonValue,

    /// Whether the plan can be selected by new registrations
    pub is_active: bool,

    /// Timestamp when the plan was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Timestamp when the plan was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
