//! # Server Configuration
//!
//! This module contains the server setup and configuration for the Workforce HRM API.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::auth_middleware;
use crate::config::AppConfig;
use crate::handlers;
use crate::telemetry::{self, TraceContext};

/// Attach a per-request trace context so errors and logs share one
/// correlation ID.
async fn trace_context_middleware(mut request: Request, next: Next) -> Response {
    let context = TraceContext::for_request();
    request.extensions_mut().insert(context.clone());
    telemetry::with_trace_context(context, next.run(request)).await
}

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(handlers::root))
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/plans", get(handlers::plans::list_plans))
        .route("/api/registration/start", post(handlers::registration::start))
        .route(
            "/api/registration/{session_id}/select-plan",
            post(handlers::registration::select_plan),
        )
        .route(
            "/api/registration/{session_id}/add-employees",
            post(handlers::registration::add_employees),
        )
        .route(
            "/api/registration/{session_id}/pay-online",
            post(handlers::registration::pay_online),
        )
        .route(
            "/api/registration/{session_id}/pay-offline",
            post(handlers::registration::pay_offline),
        );

    let authenticated = Router::new()
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/companies", get(handlers::companies::list_companies))
        .route(
            "/api/companies/{id}",
            get(handlers::companies::get_company).patch(handlers::companies::update_company),
        )
        .route(
            "/api/companies/{id}/subdomain",
            post(handlers::companies::request_subdomain),
        )
        .route("/api/orders", get(handlers::approvals::list_orders))
        .route(
            "/api/orders/{id}/approve",
            post(handlers::approvals::approve_order),
        )
        .route(
            "/api/orders/{id}/reject",
            post(handlers::approvals::reject_order),
        )
        .route(
            "/api/offline-requests",
            get(handlers::approvals::list_offline_requests),
        )
        .route(
            "/api/offline-requests/{id}/approve",
            post(handlers::approvals::approve_offline_request),
        )
        .route(
            "/api/offline-requests/{id}/reject",
            post(handlers::approvals::reject_offline_request),
        )
        .route(
            "/api/admin/subdomain-requests",
            get(handlers::approvals::list_subdomain_requests),
        )
        .route(
            "/api/admin/subdomain-requests/{id}/approve",
            post(handlers::approvals::approve_subdomain_request),
        )
        .route(
            "/api/admin/subdomain-requests/{id}/reject",
            post(handlers::approvals::reject_subdomain_request),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public)
        .merge(authenticated)
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;
    let profile = config.profile.clone();

    let state = AppState {
        config: Arc::new(config),
        db,
    };
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::auth::login,
        crate::handlers::auth::logout,
        crate::handlers::plans::list_plans,
        crate::handlers::registration::start,
        crate::handlers::registration::select_plan,
        crate::handlers::registration::add_employees,
        crate::handlers::registration::pay_online,
        crate::handlers::registration::pay_offline,
        crate::handlers::companies::list_companies,
        crate::handlers::companies::get_company,
        crate::handlers::companies::update_company,
        crate::handlers::companies::request_subdomain,
        crate::handlers::approvals::list_orders,
        crate::handlers::approvals::list_offline_requests,
        crate::handlers::approvals::list_subdomain_requests,
        crate::handlers::approvals::approve_order,
        crate::handlers::approvals::reject_order,
        crate::handlers::approvals::approve_offline_request,
        crate::handlers::approvals::reject_offline_request,
        crate::handlers::approvals::approve_subdomain_request,
        crate::handlers::approvals::reject_subdomain_request,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::error::ApiError,
            crate::handlers::auth::LoginRequestDto,
            crate::handlers::auth::LoginResponseDto,
            crate::handlers::auth::UserDto,
            crate::handlers::plans::PlanDto,
            crate::handlers::registration::StartRegistrationDto,
            crate::handlers::registration::SelectPlanDto,
            crate::handlers::registration::AddEmployeesDto,
            crate::handlers::registration::PayOnlineDto,
            crate::handlers::registration::PayOfflineDto,
            crate::handlers::registration::RegistrationSessionDto,
            crate::handlers::registration::RegistrationCompleteDto,
            crate::handlers::companies::CompanyDto,
            crate::handlers::companies::UpdateCompanyDto,
            crate::handlers::companies::RequestSubdomainDto,
            crate::handlers::approvals::OrderDto,
            crate::handlers::approvals::OfflineRequestDto,
            crate::handlers::approvals::RejectDto,
            crate::models::user::UserRole,
            crate::models::company::CompanyStatus,
            crate::models::company::SubdomainStatus,
            crate::models::registration_session::RegistrationStep,
            crate::models::order::OrderStatus,
            crate::models::offline_payment_request::OfflineRequestStatus,
        )
    ),
    info(
        title = "Workforce HRM API",
        description = "Multi-tenant HRM core: registration, subscriptions and approvals",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
