//! # Approvals API Handlers
//!
//! Super-admin review queues and decision endpoints for payment orders,
//! offline payment requests and subdomain requests.

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::approval::ApprovalService;
use crate::auth::SuperAdmin;
use crate::error::ApiError;
use crate::handlers::ApiJson;
use crate::handlers::companies::CompanyDto;
use crate::models::offline_payment_request::{self, OfflineRequestStatus};
use crate::models::order::{self, OrderStatus};
use crate::repositories::{CompanyRepository, OfflinePaymentRequestRepository, OrderRepository};
use crate::server::AppState;

/// Public view of an online payment order
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub plan_id: Uuid,
    /// Amount in minor currency units
    pub amount: i64,
    pub status: OrderStatus,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<order::Model> for OrderDto {
    fn from(order: order::Model) -> Self {
        Self {
            id: order.id,
            company_id: order.company_id,
            plan_id: order.plan_id,
            amount: order.amount,
            status: order.status,
            approved_by: order.approved_by,
            approved_at: order.approved_at,
            rejection_reason: order.rejection_reason,
            created_at: order.created_at,
        }
    }
}

/// Public view of an offline payment request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OfflineRequestDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub plan_id: Uuid,
    pub amount: i64,
    pub status: OfflineRequestStatus,
    pub notes: Option<String>,
    pub approved_by: Option<Uuid>,
    pub approved_at: Option<chrono::DateTime<chrono::Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<offline_payment_request::Model> for OfflineRequestDto {
    fn from(request: offline_payment_request::Model) -> Self {
        Self {
            id: request.id,
            company_id: request.company_id,
            plan_id: request.plan_id,
            amount: request.amount,
            status: request.status,
            notes: request.notes,
            approved_by: request.approved_by,
            approved_at: request.approved_at,
            rejection_reason: request.rejection_reason,
            created_at: request.created_at,
        }
    }
}

/// Request payload carrying a rejection reason
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RejectDto {
    /// Why the request was declined; shown to the company admin
    #[schema(example = "Bank transfer was never received")]
    pub reason: String,
}

/// Status filter for order listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderListParams {
    /// Restrict to one status; omit for all orders
    pub status: Option<OrderStatus>,
}

/// Status filter for offline request listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct OfflineRequestListParams {
    /// Restrict to one status; omit for all requests
    pub status: Option<OfflineRequestStatus>,
}

/// List payment orders
#[utoipa::path(
    get,
    path = "/api/orders",
    security(("bearer_auth" = [])),
    params(OrderListParams),
    responses(
        (status = 200, description = "Orders, newest first", body = [OrderDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
    Query(params): Query<OrderListParams>,
) -> Result<Json<Vec<OrderDto>>, ApiError> {
    let orders = OrderRepository::new(&state.db).list(params.status).await?;
    Ok(Json(orders.into_iter().map(OrderDto::from).collect()))
}

/// List offline payment requests
#[utoipa::path(
    get,
    path = "/api/offline-requests",
    security(("bearer_auth" = [])),
    params(OfflineRequestListParams),
    responses(
        (status = 200, description = "Requests, newest first", body = [OfflineRequestDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn list_offline_requests(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
    Query(params): Query<OfflineRequestListParams>,
) -> Result<Json<Vec<OfflineRequestDto>>, ApiError> {
    let requests = OfflinePaymentRequestRepository::new(&state.db)
        .list(params.status)
        .await?;
    Ok(Json(requests.into_iter().map(OfflineRequestDto::from).collect()))
}

/// List companies with a subdomain request awaiting review
#[utoipa::path(
    get,
    path = "/api/admin/subdomain-requests",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pending subdomain requests, oldest first", body = [CompanyDto]),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn list_subdomain_requests(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
) -> Result<Json<Vec<CompanyDto>>, ApiError> {
    let companies = CompanyRepository::new(&state.db)
        .list_pending_subdomain_requests()
        .await?;
    Ok(Json(companies.into_iter().map(CompanyDto::from).collect()))
}

/// Approve a payment order and activate its company
#[utoipa::path(
    post,
    path = "/api/orders/{id}/approve",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order completed, company activated", body = OrderDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Order not found", body = ApiError),
        (status = 409, description = "Order already reviewed", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn approve_order(
    State(state): State<AppState>,
    SuperAdmin(admin): SuperAdmin,
    Path(order_id): Path<Uuid>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = ApprovalService::new(&state.db)
        .approve_order(order_id, admin.user_id)
        .await?;
    Ok(Json(order.into()))
}

/// Reject a payment order
#[utoipa::path(
    post,
    path = "/api/orders/{id}/reject",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order identifier")),
    request_body = RejectDto,
    responses(
        (status = 200, description = "Order rejected", body = OrderDto),
        (status = 400, description = "Missing rejection reason", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Order not found", body = ApiError),
        (status = 409, description = "Order already reviewed", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn reject_order(
    State(state): State<AppState>,
    SuperAdmin(admin): SuperAdmin,
    Path(order_id): Path<Uuid>,
    ApiJson(request): ApiJson<RejectDto>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = ApprovalService::new(&state.db)
        .reject_order(order_id, admin.user_id, &request.reason)
        .await?;
    Ok(Json(order.into()))
}

/// Approve an offline payment request and activate its company
#[utoipa::path(
    post,
    path = "/api/offline-requests/{id}/approve",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Offline payment request identifier")),
    responses(
        (status = 200, description = "Request approved, company activated", body = OfflineRequestDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Request not found", body = ApiError),
        (status = 409, description = "Request already reviewed", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn approve_offline_request(
    State(state): State<AppState>,
    SuperAdmin(admin): SuperAdmin,
    Path(request_id): Path<Uuid>,
) -> Result<Json<OfflineRequestDto>, ApiError> {
    let request = ApprovalService::new(&state.db)
        .approve_offline_request(request_id, admin.user_id)
        .await?;
    Ok(Json(request.into()))
}

/// Reject an offline payment request
#[utoipa::path(
    post,
    path = "/api/offline-requests/{id}/reject",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Offline payment request identifier")),
    request_body = RejectDto,
    responses(
        (status = 200, description = "Request rejected", body = OfflineRequestDto),
        (status = 400, description = "Missing rejection reason", body = ApiError),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Request not found", body = ApiError),
        (status = 409, description = "Request already reviewed", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn reject_offline_request(
    State(state): State<AppState>,
    SuperAdmin(admin): SuperAdmin,
    Path(request_id): Path<Uuid>,
    ApiJson(request): ApiJson<RejectDto>,
) -> Result<Json<OfflineRequestDto>, ApiError> {
    let request = ApprovalService::new(&state.db)
        .reject_offline_request(request_id, admin.user_id, &request.reason)
        .await?;
    Ok(Json(request.into()))
}

/// Approve a subdomain request
#[utoipa::path(
    post,
    path = "/api/admin/subdomain-requests/{id}/approve",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Subdomain approved", body = CompanyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Company not found", body = ApiError),
        (status = 409, description = "No pending subdomain request", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn approve_subdomain_request(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyDto>, ApiError> {
    let company = ApprovalService::new(&state.db)
        .approve_subdomain(company_id)
        .await?;
    Ok(Json(company.into()))
}

/// Reject a subdomain request
#[utoipa::path(
    post,
    path = "/api/admin/subdomain-requests/{id}/reject",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Company identifier")),
    responses(
        (status = 200, description = "Subdomain rejected", body = CompanyDto),
        (status = 401, description = "Missing or invalid bearer token", body = ApiError),
        (status = 403, description = "Super admin access required", body = ApiError),
        (status = 404, description = "Company not found", body = ApiError),
        (status = 409, description = "No pending subdomain request", body = ApiError)
    ),
    tag = "approvals"
)]
pub async fn reject_subdomain_request(
    State(state): State<AppState>,
    SuperAdmin(_admin): SuperAdmin,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyDto>, ApiError> {
    let company = ApprovalService::new(&state.db)
        .reject_subdomain(company_id)
        .await?;
    Ok(Json(company.into()))
}
