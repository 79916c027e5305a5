//! # Registration State Machine
//!
//! Five-step company signup: company info, plan selection, employee count,
//! payment, complete. Each step only accepts a session sitting exactly on the
//! preceding step; anything else is an `INVALID_STATE` conflict and mutates
//! nothing. Finalization at the payment step creates the company, its admin
//! account and the payment record in one transaction.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel, Set, TransactionTrait};
use serde_json::json;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::{
    ApiError, duplicate_field, invalid_state, not_found, plan_limit_exceeded, validation_error,
};
use crate::models::company::{self, CompanyStatus};
use crate::models::offline_payment_request::{self, OfflineRequestStatus};
use crate::models::order::{self, OrderStatus};
use crate::models::registration_session::{self, RegistrationStep};
use crate::models::user::{self, UserRole, UserStatus};
use crate::models::plan;
use crate::password::hash_password;
use crate::repositories::{
    CompanyRepository, PlanRepository, RegistrationSessionRepository, UserRepository,
    session as session_repo,
};

/// Form fields for the first registration step.
#[derive(Debug, Clone)]
pub struct StartRegistration {
    pub company_name: String,
    pub admin_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
    pub terms_accepted: bool,
}

/// Card fields for online payment. Presence is validated, card semantics
/// (Luhn, expiry windows) deliberately are not.
#[derive(Debug, Clone)]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

/// Result of a successful payment step.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    pub company: company::Model,
    pub user: user::Model,
    pub token: String,
    pub amount: i64,
}

/// Total subscription cost in minor currency units.
///
/// The plan price covers `employees_included` seats; every seat beyond that
/// is billed at `price_per_additional_employee`.
pub fn total_cost(plan: &plan::Model, employee_count: i32) -> i64 {
    if employee_count <= plan.employees_included {
        plan.price
    } else {
        let additional = i64::from(employee_count - plan.employees_included);
        plan.price + additional * plan.price_per_additional_employee
    }
}

/// Registration session state machine service
pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
    config: &'a AppConfig,
}

impl<'a> RegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a AppConfig) -> Self {
        Self { db, config }
    }

    /// Step 1: validate the signup form and open a registration session.
    pub async fn start(
        &self,
        input: StartRegistration,
    ) -> Result<registration_session::Model, ApiError> {
        let sessions = RegistrationSessionRepository::new(self.db);

        let removed = sessions.cleanup_expired().await?;
        if removed > 0 {
            tracing::debug!(removed, "Removed expired registration sessions");
        }

        validate_start(&input)?;

        let companies = CompanyRepository::new(self.db);
        if companies.email_exists(&input.email).await? {
            return Err(duplicate_field("email"));
        }
        if companies.phone_exists(&input.phone).await? {
            return Err(duplicate_field("phone"));
        }
        if UserRepository::new(self.db).email_exists(&input.email).await? {
            return Err(duplicate_field("email"));
        }
        if let Some(in_flight) = sessions.contact_in_flight(&input.email, &input.phone).await? {
            let field = if in_flight.email == input.email { "email" } else { "phone" };
            return Err(duplicate_field(field));
        }

        let password_hash = hash_password(&input.password)?;
        let created = sessions
            .create(
                input.company_name,
                input.admin_name,
                input.email,
                input.phone,
                password_hash,
                self.config.registration_ttl_hours as i64,
            )
            .await?;

        tracing::info!(session_id = %created.id, "Registration started");
        Ok(created)
    }

    /// Step 2: record the chosen plan.
    pub async fn select_plan(
        &self,
        session_id: Uuid,
        plan_id: Uuid,
    ) -> Result<registration_session::Model, ApiError> {
        let sessions = RegistrationSessionRepository::new(self.db);
        let session = self.load_session(&sessions, session_id).await?;
        require_step(&session, RegistrationStep::PlanSelection)?;

        let plan = PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| not_found("Plan not found"))?;
        if !plan.is_active {
            return Err(validation_error(
                "Plan is not available",
                json!({ "plan_id": "Plan is not open for new registrations" }),
            ));
        }

        Ok(sessions.set_plan(session, plan.id).await?)
    }

    /// Step 3: record the declared employee count (defaults to 1).
    pub async fn add_employees(
        &self,
        session_id: Uuid,
        employee_count: Option<i32>,
    ) -> Result<registration_session::Model, ApiError> {
        let sessions = RegistrationSessionRepository::new(self.db);
        let session = self.load_session(&sessions, session_id).await?;
        require_step(&session, RegistrationStep::EmployeeCount)?;

        let employee_count = employee_count.unwrap_or(1);
        if employee_count < 1 {
            return Err(validation_error(
                "Invalid employee count",
                json!({ "employee_count": "Must be at least 1" }),
            ));
        }

        let plan = self.session_plan(&session).await?;
        if employee_count > plan.max_employees {
            return Err(plan_limit_exceeded(employee_count, plan.max_employees));
        }

        Ok(sessions.set_employee_count(session, employee_count).await?)
    }

    /// Step 4a: finalize with a card payment.
    pub async fn pay_online(
        &self,
        session_id: Uuid,
        card: CardDetails,
    ) -> Result<RegistrationOutcome, ApiError> {
        let sessions = RegistrationSessionRepository::new(self.db);
        let session = self.load_session(&sessions, session_id).await?;
        require_step(&session, RegistrationStep::Payment)?;
        validate_card(&card)?;

        self.finalize(session, PaymentMethod::Online).await
    }

    /// Step 4b: finalize with an offline payment request for manual review.
    pub async fn pay_offline(
        &self,
        session_id: Uuid,
        notes: Option<String>,
    ) -> Result<RegistrationOutcome, ApiError> {
        let sessions = RegistrationSessionRepository::new(self.db);
        let session = self.load_session(&sessions, session_id).await?;
        require_step(&session, RegistrationStep::Payment)?;

        self.finalize(session, PaymentMethod::Offline { notes }).await
    }

    async fn load_session(
        &self,
        sessions: &RegistrationSessionRepository<'_>,
        session_id: Uuid,
    ) -> Result<registration_session::Model, ApiError> {
        sessions
            .find_live(session_id)
            .await?
            .ok_or_else(|| not_found("Registration session not found"))
    }

    async fn session_plan(
        &self,
        session: &registration_session::Model,
    ) -> Result<plan::Model, ApiError> {
        let plan_id = session
            .plan_id
            .ok_or_else(|| invalid_state("No plan selected for this registration"))?;
        PlanRepository::new(self.db)
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| not_found("Plan not found"))
    }

    /// Create company, admin account and payment record atomically, mark the
    /// registration complete and issue a login session.
    async fn finalize(
        &self,
        session: registration_session::Model,
        method: PaymentMethod,
    ) -> Result<RegistrationOutcome, ApiError> {
        let plan = self.session_plan(&session).await?;
        let employee_count = session.employee_count.unwrap_or(1);
        let amount = total_cost(&plan, employee_count);
        let now = Utc::now();

        let txn = self.db.begin().await?;

        let created_company = company::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(session.company_name.clone()),
            email: Set(session.email.clone()),
            phone: Set(session.phone.clone()),
            plan_id: Set(plan.id),
            max_employees: Set(plan.max_employees),
            status: Set(CompanyStatus::Pending),
            subdomain: Set(None),
            subdomain_status: Set(None),
            subdomain_requested_at: Set(None),
            logo_url: Set(None),
            primary_color: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        let created_user = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(session.email.clone()),
            password_hash: Set(session.password_hash.clone()),
            name: Set(session.admin_name.clone()),
            role: Set(UserRole::CompanyAdmin),
            company_id: Set(Some(created_company.id)),
            status: Set(UserStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        match method {
            PaymentMethod::Online => {
                order::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    company_id: Set(created_company.id),
                    plan_id: Set(plan.id),
                    amount: Set(amount),
                    status: Set(OrderStatus::Pending),
                    approved_by: Set(None),
                    approved_at: Set(None),
                    rejection_reason: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?;
            }
            PaymentMethod::Offline { notes } => {
                offline_payment_request::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    company_id: Set(created_company.id),
                    plan_id: Set(plan.id),
                    amount: Set(amount),
                    status: Set(OfflineRequestStatus::Pending),
                    notes: Set(notes),
                    approved_by: Set(None),
                    approved_at: Set(None),
                    rejection_reason: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await?;
            }
        }

        let mut completed = session.into_active_model();
        completed.step = Set(RegistrationStep::Complete);
        completed.updated_at = Set(now);
        completed.update(&txn).await?;

        let login = session_repo::insert_session(
            &txn,
            session_repo::new_session(&created_user, self.config.session_ttl_hours as i64),
        )
        .await?;

        txn.commit().await?;

        tracing::info!(
            company_id = %created_company.id,
            amount,
            "Registration finalized, company awaiting approval"
        );

        Ok(RegistrationOutcome {
            company: created_company,
            user: created_user,
            token: login.token,
            amount,
        })
    }
}

enum PaymentMethod {
    Online,
    Offline { notes: Option<String> },
}

fn require_step(
    session: &registration_session::Model,
    expected: RegistrationStep,
) -> Result<(), ApiError> {
    if session.step == expected {
        Ok(())
    } else {
        Err(invalid_state(&format!(
            "Registration is at step '{}', expected '{}'",
            session.step.as_str(),
            expected.as_str(),
        )))
    }
}

fn validate_start(input: &StartRegistration) -> Result<(), ApiError> {
    let mut field_errors = serde_json::Map::new();

    for (field, value) in [
        ("company_name", &input.company_name),
        ("admin_name", &input.admin_name),
        ("email", &input.email),
        ("phone", &input.phone),
        ("password", &input.password),
    ] {
        if value.trim().is_empty() {
            field_errors.insert(field.to_string(), json!("Required field is missing"));
        }
    }

    if !input.email.trim().is_empty() && !input.email.contains('@') {
        field_errors.insert("email".to_string(), json!("Must be a valid email address"));
    }
    if input.password != input.password_confirmation {
        field_errors.insert(
            "password_confirmation".to_string(),
            json!("Passwords do not match"),
        );
    }
    if !input.terms_accepted {
        field_errors.insert(
            "terms_accepted".to_string(),
            json!("Terms must be accepted"),
        );
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            "Validation failed",
            serde_json::Value::Object(field_errors),
        ))
    }
}

fn validate_card(card: &CardDetails) -> Result<(), ApiError> {
    let mut field_errors = serde_json::Map::new();

    for (field, value) in [
        ("card_number", &card.card_number),
        ("expiry_month", &card.expiry_month),
        ("expiry_year", &card.expiry_year),
        ("cvv", &card.cvv),
    ] {
        if value.trim().is_empty() {
            field_errors.insert(field.to_string(), json!("Required field is missing"));
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(validation_error(
            "Invalid card details",
            serde_json::Value::Object(field_errors),
        ))
    }
}
