//! # Registration API Handlers
//!
//! HTTP surface of the five-step signup state machine. Handlers translate
//! JSON payloads into service calls; all sequencing and validation rules live
//! in [`crate::registration`].

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::ApiJson;
use crate::handlers::auth::UserDto;
use crate::models::registration_session::{self, RegistrationStep};
use crate::registration::{CardDetails, RegistrationService, StartRegistration};
use crate::server::AppState;

/// Request payload for starting a registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StartRegistrationDto {
    #[schema(example = "Acme Corp")]
    pub company_name: String,
    #[schema(example = "Dana Admin")]
    pub admin_name: String,
    #[schema(example = "dana@acme.example")]
    pub email: String,
    #[schema(example = "+15550100")]
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    /// Must be true to proceed
    pub terms_accepted: bool,
}

/// Request payload for the plan selection step
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectPlanDto {
    pub plan_id: Uuid,
}

/// Request payload for the employee count step
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddEmployeesDto {
    /// Declared number of employees; defaults to the length of `employees`,
    /// or 1 when both are omitted
    pub employee_count: Option<i32>,
    /// Draft employee records collected by the signup wizard. Only their
    /// count matters here; the records themselves are entered after
    /// activation.
    #[serde(default)]
    pub employees: Option<Vec<serde_json::Value>>,
}

impl AddEmployeesDto {
    fn effective_count(&self) -> Option<i32> {
        self.employee_count.or_else(|| {
            self.employees
                .as_ref()
                .filter(|list| !list.is_empty())
                .map(|list| list.len() as i32)
        })
    }
}

/// Request payload for online card payment
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PayOnlineDto {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

/// Request payload for an offline payment request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PayOfflineDto {
    /// Free-form notes for the reviewer (bank reference, PO number, ...)
    pub notes: Option<String>,
}

/// Progress snapshot of a registration session
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationSessionDto {
    pub session_id: Uuid,
    /// The next step the caller is expected to submit
    pub step: RegistrationStep,
    pub plan_id: Option<Uuid>,
    pub employee_count: Option<i32>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl From<registration_session::Model> for RegistrationSessionDto {
    fn from(session: registration_session::Model) -> Self {
        Self {
            session_id: session.id,
            step: session.step,
            plan_id: session.plan_id,
            employee_count: session.employee_count,
            expires_at: session.expires_at,
        }
    }
}

/// Response payload for a finalized registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegistrationCompleteDto {
    /// Bearer token for the newly created admin account
    pub token: String,
    pub user: UserDto,
    /// The created company, pending super-admin approval
    pub company_id: Uuid,
    /// Total charged/invoiced amount in minor currency units
    pub amount: i64,
}

/// Start a company registration
#[utoipa::path(
    post,
    path = "/api/registration/start",
    request_body = StartRegistrationDto,
    responses(
        (status = 201, description = "Registration session created", body = RegistrationSessionDto),
        (status = 400, description = "Validation failed or duplicate field", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tag = "registration"
)]
pub async fn start(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StartRegistrationDto>,
) -> Result<(StatusCode, Json<RegistrationSessionDto>), ApiError> {
    let session = RegistrationService::new(&state.db, &state.config)
        .start(StartRegistration {
            company_name: request.company_name,
            admin_name: request.admin_name,
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            password: request.password,
            password_confirmation: request.password_confirmation,
            terms_accepted: request.terms_accepted,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}

/// Select a subscription plan
#[utoipa::path(
    post,
    path = "/api/registration/{session_id}/select-plan",
    params(("session_id" = Uuid, Path, description = "Registration session")),
    request_body = SelectPlanDto,
    responses(
        (status = 200, description = "Plan recorded", body = RegistrationSessionDto),
        (status = 400, description = "Plan not available", body = ApiError),
        (status = 404, description = "Unknown session or plan", body = ApiError),
        (status = 409, description = "Step submitted out of order", body = ApiError)
    ),
    tag = "registration"
)]
pub async fn select_plan(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<SelectPlanDto>,
) -> Result<Json<RegistrationSessionDto>, ApiError> {
    let session = RegistrationService::new(&state.db, &state.config)
        .select_plan(session_id, request.plan_id)
        .await?;
    Ok(Json(session.into()))
}

/// Declare the employee count
#[utoipa::path(
    post,
    path = "/api/registration/{session_id}/add-employees",
    params(("session_id" = Uuid, Path, description = "Registration session")),
    request_body = AddEmployeesDto,
    responses(
        (status = 200, description = "Employee count recorded", body = RegistrationSessionDto),
        (status = 400, description = "Count exceeds plan limit", body = ApiError),
        (status = 404, description = "Unknown session", body = ApiError),
        (status = 409, description = "Step submitted out of order", body = ApiError)
    ),
    tag = "registration"
)]
pub async fn add_employees(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<AddEmployeesDto>,
) -> Result<Json<RegistrationSessionDto>, ApiError> {
    let session = RegistrationService::new(&state.db, &state.config)
        .add_employees(session_id, request.effective_count())
        .await?;
    Ok(Json(session.into()))
}

/// Finalize registration with a card payment
#[utoipa::path(
    post,
    path = "/api/registration/{session_id}/pay-online",
    params(("session_id" = Uuid, Path, description = "Registration session")),
    request_body = PayOnlineDto,
    responses(
        (status = 201, description = "Company created, order pending review", body = RegistrationCompleteDto),
        (status = 400, description = "Invalid card details", body = ApiError),
        (status = 404, description = "Unknown session", body = ApiError),
        (status = 409, description = "Step submitted out of order", body = ApiError)
    ),
    tag = "registration"
)]
pub async fn pay_online(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<PayOnlineDto>,
) -> Result<(StatusCode, Json<RegistrationCompleteDto>), ApiError> {
    let outcome = RegistrationService::new(&state.db, &state.config)
        .pay_online(
            session_id,
            CardDetails {
                card_number: request.card_number,
                expiry_month: request.expiry_month,
                expiry_year: request.expiry_year,
                cvv: request.cvv,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCompleteDto {
            token: outcome.token,
            company_id: outcome.company.id,
            amount: outcome.amount,
            user: outcome.user.into(),
        }),
    ))
}

/// Finalize registration with an offline payment request
#[utoipa::path(
    post,
    path = "/api/registration/{session_id}/pay-offline",
    params(("session_id" = Uuid, Path, description = "Registration session")),
    request_body = PayOfflineDto,
    responses(
        (status = 201, description = "Company created, request pending review", body = RegistrationCompleteDto),
        (status = 404, description = "Unknown session", body = ApiError),
        (status = 409, description = "Step submitted out of order", body = ApiError)
    ),
    tag = "registration"
)]
pub async fn pay_offline(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    ApiJson(request): ApiJson<PayOfflineDto>,
) -> Result<(StatusCode, Json<RegistrationCompleteDto>), ApiError> {
    let outcome = RegistrationService::new(&state.db, &state.config)
        .pay_offline(session_id, request.notes)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationCompleteDto {
            token: outcome.token,
            company_id: outcome.company.id,
            amount: outcome.amount,
            user: outcome.user.into(),
        }),
    ))
}
