//! Offline payment request entity model
//!
//! Created when a registrant opts to pay outside the platform (e.g., wire
//! transfer). A super admin verifies the payment manually and approves or
//! rejects the request.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Offline payment request review status.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum OfflineRequestStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Offline payment request entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "offline_payment_requests")]
pub struct Model {
    /// Unique identifier for the request (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Company this request activates
    pub company_id: Uuid,

    /// Plan being purchased
    pub plan_id: Uuid,

    /// Total amount in minor currency units
    pub amount: i64,

    /// Free-form notes from the registrant (e.g., "wire transfer pending")
    pub notes: Option<String>,

    /// Review status
    pub status: OfflineRequestStatus,

    /// Super admin that resolved the request
    pub approved_by: Option<Uuid>,

    /// When the request was resolved
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Reason recorded on rejection (mandatory)
    pub rejection_reason: Option<String>,

    /// Timestamp when the request was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Timestamp when the request was last updated
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
