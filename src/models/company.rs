//! Company entity model
//!
//! This module contains the SeaORM entity model for the companies table.
//! A company is the tenant unit: every downstream resource is scoped to one.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a tenant. Companies are never hard-deleted;
/// they only move between these states.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "suspended")]
    Suspended,
}

/// Review status of a tenant's custom subdomain request.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum SubdomainStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Company entity representing a tenant
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    /// Unique identifier for the company (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name of the company
    pub name: String,

    /// Contact email, globally unique across tenants
    pub email: String,

    /// Contact phone, globally unique across tenants
    pub phone: String,

    /// Subscribed plan
    pub plan_id: Uuid,

    /// Employee ceiling snapshotted from the plan at signup.
    /// Later plan edits do not change this value.
    pub max_employees: i32,

    /// Lifecycle status
    pub status: CompanyStatus,

    /// Requested custom subdomain, if any
    pub subdomain: Option<String>,

    /// Review status of the subdomain request
    pub subdomain_status: Option<SubdomainStatus>,

    /// When the subdomain was requested
    pub subdomain_requested_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Branding: logo URL
    pub logo_url: Option<String>,

    /// Branding: primary color
    pub primary_color: Option<String>,

    /// Timestamp when the company was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Timestamp when the company was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plan::Entity",
        from = "Column::PlanId",
        to = "super::plan::Column::Id"
    )]
    Plan,
}

impl Related<super::plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
