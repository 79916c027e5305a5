//! Order entity model
//!
//! Online-payment orders created at the end of the registration flow.
//! Mutated only by the approval workflow; immutable once terminal.

use sea_orm::ActiveModelBehavior;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order review status.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Order entity for online payments
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the order (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Company this order activates
    pub company_id: Uuid,

    /// Plan being purchased
    pub plan_id: Uuid,

    /// Total amount in minor currency units
    pub amount: i64,

    /// Review status
    pub status: OrderStatus,

    /// Super admin that resolved the order
    pub approved_by: Option<Uuid>,

    /// When the order was resolved
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Reason recorded on rejection
    pub rejection_reason: Option<String>,

    /// Timestamp when the order was created
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Timestamp when the order was last updated
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
