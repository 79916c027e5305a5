//! # Data Models
//!
//! This module contains all the SeaORM entities used throughout the Workforce HRM API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod company;
pub mod offline_payment_request;
pub mod order;
pub mod plan;
pub mod registration_session;
pub mod session;
pub mod user;

pub use company::Entity as Company;
pub use offline_payment_request::Entity as OfflinePaymentRequest;
pub use order::Entity as Order;
pub use plan::Entity as Plan;
pub use registration_session::Entity as RegistrationSession;
pub use session::Entity as Session;
pub use user::Entity as User;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "workforce-hrm".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
