//! # API Handlers
//!
//! This module contains all the HTTP endpoint handlers for the Workforce HRM API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::Json;

use crate::error::ApiError;
use crate::models::ServiceInfo;

pub mod approvals;
pub mod auth;
pub mod companies;
pub mod plans;
pub mod registration;

/// JSON body extractor whose rejection is the problem+json [`ApiError`]
/// envelope rather than axum's plain-text response.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state).await?;
        Ok(ApiJson(value))
    }
}

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}
