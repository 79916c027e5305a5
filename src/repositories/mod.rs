//! # Repository Layer
//!
//! This module contains repository implementations that encapsulate SeaORM operations
//! for database entities, providing a clean API for data access. Uniqueness of
//! company email/phone, user email and session tokens is enforced by unique
//! indexes at the schema level; repository pre-checks exist only to name the
//! offending field in error responses.

pub mod company;
pub mod offline_payment_request;
pub mod order;
pub mod plan;
pub mod registration_session;
pub mod session;
pub mod user;

pub use company::CompanyRepository;
pub use offline_payment_request::OfflinePaymentRequestRepository;
pub use order::OrderRepository;
pub use plan::PlanRepository;
pub use registration_session::RegistrationSessionRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
