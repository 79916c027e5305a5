//! # Workforce HRM Library
//!
//! This library provides the core functionality for the Workforce HRM API:
//! multi-tenant company registration, subscription approval workflows and
//! bearer-session authentication.

pub mod approval;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod registration;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod telemetry;
pub use migration;
