//! # Plans API Handlers
//!
//! Read-only plan catalogue used by the registration plan-selection step.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::plan;
use crate::repositories::PlanRepository;
use crate::server::AppState;

/// Public view of a subscription plan
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub id: Uuid,
    /// Stable machine name, e.g. "basic"
    #[schema(example = "basic")]
    pub name: String,
    #[schema(example = "Basic")]
    pub display_name: String,
    /// Base price in minor currency units
    pub price: i64,
    pub duration_months: i32,
    /// Seats covered by the base price
    pub employees_included: i32,
    /// Per-seat price beyond the included seats, minor units
    pub price_per_additional_employee: i64,
    /// Hard seat ceiling for this plan
    pub max_employees: i32,
    pub features: serde_json::Value,
}

impl From<plan::Model> for PlanDto {
    fn from(plan: plan::Model) -> Self {
        Self {
            id: plan.id,
            name: plan.name,
            display_name: plan.display_name,
            price: plan.price,
            duration_months: plan.duration_months,
            employees_included: plan.employees_included,
            price_per_additional_employee: plan.price_per_additional_employee,
            max_employees: plan.max_employees,
            features: plan.features,
        }
    }
}

/// List plans open for new registrations
#[utoipa::path(
    get,
    path = "/api/plans",
    responses(
        (status = 200, description = "Active plans, cheapest first", body = [PlanDto]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "plans"
)]
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<PlanDto>>, ApiError> {
    let plans = PlanRepository::new(&state.db).list_active().await?;
    Ok(Json(plans.into_iter().map(PlanDto::from).collect()))
}
