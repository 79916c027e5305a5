//! Database migrations for the Workforce HRM API.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_12_01_000001_create_plans;
mod m2025_12_01_000002_create_companies;
mod m2025_12_01_000003_create_users;
mod m2025_12_01_000004_create_registration_sessions;
mod m2025_12_01_000005_create_orders;
mod m2025_12_01_000006_create_offline_payment_requests;
mod m2025_12_01_000007_create_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_12_01_000001_create_plans::Migration),
            Box::new(m2025_12_01_000002_create_companies::Migration),
            Box::new(m2025_12_01_000003_create_users::Migration),
            Box::new(m2025_12_01_000004_create_registration_sessions::Migration),
            Box::new(m2025_12_01_000005_create_orders::Migration),
            Box::new(m2025_12_01_000006_create_offline_payment_requests::Migration),
            Box::new(m2025_12_01_000007_create_sessions::Migration),
        ]
    }
}
