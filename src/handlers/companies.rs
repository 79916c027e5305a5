//! # Companies API Handlers
//!
//! Tenant listing, inspection, super-admin edits and subdomain requests.

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::{CompanyAdmin, CurrentUser, SuperAdmin};
use crate::error::{ApiError, invalid_state, not_found, validation_error};
use crate::handlers::ApiJson;
use crate::models::company::{self, CompanyStatus, SubdomainStatus};
use crate::repositories::company::CompanyAdminUpdate;
use crate::repositories::{CompanyRepository, PlanRepository};
use crate::server::AppState;

/// Public view of a company tenant
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan_id: Uuid,
    pub max_employees: i32,
    pub status: CompanyStatus,
    pub subdomain: Option<String>,
    pub subdomain_status: Option<SubdomainStatus>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<company::Model> for CompanyDto {
    fn from(company: company::Model) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            phone: company.phone,
            plan_id: company.plan_id,
            max_employees: company.max_employees,
            status: company.status,
            subdomain: company.subdomain,
            subdomain_status: company.subdomain_status,
            created_at: company.created_at,
        }
    }
}

/// Request payload for a super-admin company edit
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyDto {
    pub status: Option<CompanyStatus>,
    pub plan_id: Option<Uuid>,
    pub max_employees: Option<i32>,
}

/// Request payload for a subdomain request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RequestSubdomainDto {
    /// Desired subdomain label, lowercase letters, digits and hyphens
    #[schema(example = "acme")]
    pub subdomain: String,
}

/// List all companies
#[utoipa::path(
    get,
    path = "/api/companies",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All tenants, newest first", body = [CompanyDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError)
    ),
    tag = "companies"
)]
pub async fn list_companies(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
) -> Result<Json<Vec<CompanyDto>>, ApiError> {
    let companies = CompanyRepository::new(&state.db).list_all().await?;
    Ok(Json(companies.into_iter().map(CompanyDto::from).collect()))
}

/// Get one company
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Company details", body = CompanyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Outside the caller's company scope", body = ApiError),
        (status = 404, description = "Company not found", body = ApiError)
    ),
    tag = "companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyDto>, ApiError> {
    current_user.ensure_company_scope(company_id)?;

    let company = CompanyRepository::new(&state.db)
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| not_found("Company not found"))?;
    Ok(Json(company.into()))
}

/// Edit a company's lifecycle status, plan or seat ceiling
#[utoipa::path(
    patch,
    path = "/api/companies/{id}",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Company identifier")),
    request_body = UpdateCompanyDto,
    responses(
        (status = 200, description = "Updated company", body = CompanyDto),
        (status = 400, description = "Validation failed", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Company or plan not found", body = ApiError)
    ),
    tag = "companies"
)]
pub async fn update_company(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
    Path(company_id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateCompanyDto>,
) -> Result<Json<CompanyDto>, ApiError> {
    if request.max_employees.is_some_and(|max| max < 1) {
        return Err(validation_error(
            "Invalid seat ceiling",
            json!({ "max_employees": "Must be at least 1" }),
        ));
    }
    if let Some(plan_id) = request.plan_id {
        PlanRepository::new(&state.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| not_found("Plan not found"))?;
    }

    let companies = CompanyRepository::new(&state.db);
    let company = companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| not_found("Company not found"))?;

    let updated = companies
        .apply_admin_update(
            company,
            CompanyAdminUpdate {
                status: request.status,
                plan_id: request.plan_id,
                max_employees: request.max_employees,
            },
        )
        .await?;
    Ok(Json(updated.into()))
}

/// Request a subdomain for the caller's company
#[utoipa::path(
    post,
    path = "/api/companies/{id}/subdomain",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Company identifier")),
    request_body = RequestSubdomainDto,
    responses(
        (status = 200, description = "Subdomain request recorded", body = CompanyDto),
        (status = 400, description = "Invalid subdomain label", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Company admin access required", body = ApiError),
        (status = 404, description = "Company not found", body = ApiError),
        (status = 409, description = "A request is already pending review", body = ApiError)
    ),
    tag = "companies"
)]
pub async fn request_subdomain(
    State(state): State<AppState>,
    CompanyAdmin(admin): CompanyAdmin,
    Path(company_id): Path<Uuid>,
    ApiJson(request): ApiJson<RequestSubdomainDto>,
) -> Result<Json<CompanyDto>, ApiError> {
    admin.ensure_company_scope(company_id)?;

    let subdomain = request.subdomain.trim().to_lowercase();
    let valid_label = !subdomain.is_empty()
        && subdomain.len() <= 63
        && subdomain.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !subdomain.starts_with('-')
        && !subdomain.ends_with('-');
    if !valid_label {
        return Err(validation_error(
            "Invalid subdomain",
            json!({ "subdomain": "Must be a DNS label: lowercase letters, digits and inner hyphens" }),
        ));
    }

    let companies = CompanyRepository::new(&state.db);
    let company = companies
        .find_by_id(company_id)
        .await?
        .ok_or_else(|| not_found("Company not found"))?;
    if company.subdomain_status == Some(SubdomainStatus::Pending) {
        return Err(invalid_state(
            "A subdomain request is already pending review",
        ));
    }

    let updated = companies.request_subdomain(company, subdomain).await?;
    Ok(Json(updated.into()))
}
