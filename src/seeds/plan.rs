//! Plan seeding functionality
//!
//! Seeds the plans table with the default subscription catalogue so a fresh
//! deployment has selectable plans for the registration flow.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set};
use uuid::Uuid;

use crate::models::plan;
use crate::repositories::PlanRepository;

/// Seeds the plans table with the default subscription catalogue
///
/// Existing plans are left untouched; each default is only created when no
/// plan with its name exists yet.
pub async fn seed_plans(db: &DatabaseConnection) -> Result<()> {
    let repo = PlanRepository::new(db);

    let defaults = vec![
        PlanConfig {
            name: "basic",
            display_name: "Basic",
            price: 5000,
            duration_months: 12,
            employees_included: 10,
            price_per_additional_employee: 50,
            max_employees: 50,
            features: serde_json::json!(["attendance", "leave_management"]),
        },
        PlanConfig {
            name: "professional",
            display_name: "Professional",
            price: 12000,
            duration_months: 12,
            employees_included: 25,
            price_per_additional_employee: 40,
            max_employees: 200,
            features: serde_json::json!([
                "attendance",
                "leave_management",
                "payroll",
                "performance_reviews"
            ]),
        },
        PlanConfig {
            name: "enterprise",
            display_name: "Enterprise",
            price: 30000,
            duration_months: 12,
            employees_included: 100,
            price_per_additional_employee: 30,
            max_employees: 1000,
            features: serde_json::json!([
                "attendance",
                "leave_management",
                "payroll",
                "performance_reviews",
                "custom_reports",
                "priority_support"
            ]),
        },
    ];

    for plan_config in defaults {
        match repo.find_by_name(plan_config.name).await {
            Ok(Some(_)) => {
                log::info!("Plan '{}' already exists, skipping", plan_config.name);
                continue;
            }
            Ok(None) => {
                log::info!("Creating plan: {}", plan_config.name);

                let now = Utc::now();
                let plan = plan::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(plan_config.name.to_string()),
                    display_name: Set(plan_config.display_name.to_string()),
                    price: Set(plan_config.price),
                    duration_months: Set(plan_config.duration_months),
                    employees_included: Set(plan_config.employees_included),
                    price_per_additional_employee: Set(plan_config.price_per_additional_employee),
                    max_employees: Set(plan_config.max_employees),
                    features: Set(plan_config.features.clone()),
                    is_active: Set(true),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                if let Err(e) = repo.create(plan).await {
                    log::error!("Failed to create plan '{}': {}", plan_config.name, e);
                    return Err(e.into());
                }
            }
            Err(e) => {
                log::error!("Error checking if plan '{}' exists: {}", plan_config.name, e);
                return Err(e.into());
            }
        }
    }

    log::info!("Plan seeding completed successfully");
    Ok(())
}

/// Configuration structure for a default plan
struct PlanConfig {
    name: &'static str,
    display_name: &'static str,
    price: i64,
    duration_months: i32,
    employees_included: i32,
    price_per_additional_employee: i64,
    max_employees: i32,
    features: serde_json::Value,
}
