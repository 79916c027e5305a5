//! Database seeding functionality
//!
//! This module provides functionality to seed the database with initial data:
//! the default plan catalogue and, when configured, the super-admin account.

pub mod plan;
pub mod super_admin;

pub use plan::seed_plans;
pub use super_admin::seed_super_admin;
