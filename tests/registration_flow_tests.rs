//! End-to-end tests for the registration, login and approval flows, run
//! against the real router over an in-memory SQLite database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;
use workforce::config::AppConfig;
use workforce::models::{session, user};
use workforce::password::hash_password;
use workforce::seeds;
use workforce::server::{AppState, create_app};

const SUPER_ADMIN_EMAIL: &str = "root@workforce.test";
const SUPER_ADMIN_PASSWORD: &str = "root-password-123";

async fn setup() -> (Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Migration failed");

    let config = AppConfig {
        super_admin_email: Some(SUPER_ADMIN_EMAIL.to_string()),
        super_admin_password: Some(SUPER_ADMIN_PASSWORD.to_string()),
        ..Default::default()
    };
    seeds::seed_plans(&db).await.expect("Plan seeding failed");
    seeds::seed_super_admin(&db, &config)
        .await
        .expect("Super-admin seeding failed");

    let app = create_app(AppState {
        config: Arc::new(config),
        db: db.clone(),
    });
    (app, db)
}

async fn setup_app() -> Router {
    setup().await.0
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn start_payload(company: &str, email: &str, phone: &str) -> Value {
    json!({
        "company_name": company,
        "admin_name": "Dana Admin",
        "email": email,
        "phone": phone,
        "password": "hunter2hunter2",
        "password_confirmation": "hunter2hunter2",
        "terms_accepted": true,
    })
}

/// Walk a registration up to the payment step and return the session id.
async fn registration_at_payment_step(
    app: &Router,
    company: &str,
    email: &str,
    phone: &str,
    employee_count: i64,
) -> String {
    let (status, plans) = send(app, "GET", "/api/plans", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let basic = plans
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "basic")
        .expect("basic plan seeded");
    let plan_id = basic["id"].as_str().unwrap().to_string();

    let (status, session) = send(
        app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload(company, email, phone)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "start failed: {session}");
    let session_id = session["session_id"].as_str().unwrap().to_string();
    assert_eq!(session["step"], "plan_selection");

    let (status, session) = send(
        app,
        "POST",
        &format!("/api/registration/{session_id}/select-plan"),
        None,
        Some(json!({ "plan_id": plan_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["step"], "employee_count");

    let (status, session) = send(
        app,
        "POST",
        &format!("/api/registration/{session_id}/add-employees"),
        None,
        Some(json!({ "employee_count": employee_count })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["step"], "payment");

    session_id
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn offline_registration_is_approved_end_to_end() {
    let app = setup_app().await;
    let session_id = registration_at_payment_step(
        &app,
        "Acme Corp",
        "dana@acme.test",
        "+15550100",
        15,
    )
    .await;

    // 5000 base + 5 extra seats at 50 each
    let (status, complete) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-offline"),
        None,
        Some(json!({ "notes": "Bank transfer ref 4711" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "pay-offline failed: {complete}");
    assert_eq!(complete["amount"], 5250);
    assert_eq!(complete["user"]["role"], "COMPANY_ADMIN");
    let admin_token = complete["token"].as_str().unwrap().to_string();
    let company_id = complete["company_id"].as_str().unwrap().to_string();

    // Company is visible to its admin but still pending
    let (status, company) = send(
        &app,
        "GET",
        &format!("/api/companies/{company_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["status"], "pending");

    // Super admin reviews the offline request
    let root_token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, requests) = send(
        &app,
        "GET",
        "/api/offline-requests?status=pending",
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let request = requests
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["company_id"] == company_id.as_str())
        .expect("pending request for the new company");
    let request_id = request["id"].as_str().unwrap();
    assert_eq!(request["amount"], 5250);

    let (status, approved) = send(
        &app,
        "POST",
        &format!("/api/offline-requests/{request_id}/approve"),
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");
    assert!(approved["approved_by"].is_string());

    // Second review of the same request conflicts
    let (status, conflict) = send(
        &app,
        "POST",
        &format!("/api/offline-requests/{request_id}/approve"),
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(conflict["code"], "INVALID_STATE");

    // Approval activated the company
    let (status, company) = send(
        &app,
        "GET",
        &format!("/api/companies/{company_id}"),
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["status"], "active");
}

#[tokio::test]
async fn online_registration_creates_order_and_rejection_marks_company_rejected() {
    let app = setup_app().await;
    let session_id = registration_at_payment_step(
        &app,
        "Borealis Ltd",
        "kim@borealis.test",
        "+15550101",
        10,
    )
    .await;

    // Card with a missing field is rejected without advancing the session
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-online"),
        None,
        Some(json!({
            "card_number": "4242424242424242",
            "expiry_month": "12",
            "expiry_year": "2030",
            "cvv": "",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, complete) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-online"),
        None,
        Some(json!({
            "card_number": "4242424242424242",
            "expiry_month": "12",
            "expiry_year": "2030",
            "cvv": "123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "pay-online failed: {complete}");
    assert_eq!(complete["amount"], 5000);
    let company_id = complete["company_id"].as_str().unwrap().to_string();

    let root_token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, orders) = send(
        &app,
        "GET",
        "/api/orders?status=pending",
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let order_id = orders
        .as_array()
        .unwrap()
        .iter()
        .find(|o| o["company_id"] == company_id.as_str())
        .expect("pending order")["id"]
        .as_str()
        .unwrap()
        .to_string();

    // Rejection without a reason is a validation failure
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/reject"),
        Some(&root_token),
        Some(json!({ "reason": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");

    let (status, rejected) = send(
        &app,
        "POST",
        &format!("/api/orders/{order_id}/reject"),
        Some(&root_token),
        Some(json!({ "reason": "Card declined by issuer" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rejected["status"], "rejected");
    assert_eq!(rejected["rejection_reason"], "Card declined by issuer");

    let (status, company) = send(
        &app,
        "GET",
        &format!("/api/companies/{company_id}"),
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["status"], "rejected");
}

#[tokio::test]
async fn out_of_order_steps_conflict_without_mutating() {
    let app = setup_app().await;

    let (status, session) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Cyan GmbH", "lee@cyan.test", "+15550102")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = session["session_id"].as_str().unwrap().to_string();

    // Payment before plan selection
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE");

    // Employee count before plan selection
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/add-employees"),
        None,
        Some(json!({ "employee_count": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "INVALID_STATE");

    // Unknown session is a 404, not a conflict
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/registration/{}/add-employees", uuid::Uuid::new_v4()),
        None,
        Some(json!({ "employee_count": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_contact_details_are_rejected_with_field() {
    let app = setup_app().await;
    let session_id = registration_at_payment_step(
        &app,
        "Dupe Inc",
        "dupe@example.test",
        "+15550103",
        1,
    )
    .await;
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same email as the finalized company
    let (status, body) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Other Co", "dupe@example.test", "+15550104")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_FIELD");
    assert_eq!(body["details"]["field"], "email");

    // Same phone, fresh email
    let (status, body) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Other Co", "fresh@example.test", "+15550103")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_FIELD");
    assert_eq!(body["details"]["field"], "phone");

    // An in-flight registration also blocks its email
    let (status, _) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Inflight Co", "inflight@example.test", "+15550105")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Inflight Two", "inflight@example.test", "+15550106")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "DUPLICATE_FIELD");
    assert_eq!(body["details"]["field"], "email");
}

#[tokio::test]
async fn employee_count_above_plan_ceiling_is_rejected() {
    let app = setup_app().await;

    let (_, plans) = send(&app, "GET", "/api/plans", None, None).await;
    let basic = plans
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "basic")
        .unwrap();
    let plan_id = basic["id"].as_str().unwrap().to_string();

    let (status, session) = send(
        &app,
        "POST",
        "/api/registration/start",
        None,
        Some(start_payload("Limit Co", "limit@example.test", "+15550107")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = session["session_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/select-plan"),
        None,
        Some(json!({ "plan_id": plan_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // basic caps at 50 seats
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/add-employees"),
        None,
        Some(json!({ "employee_count": 51 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "PLAN_LIMIT_EXCEEDED");
    assert_eq!(body["details"]["max_employees"], 50);

    // The session did not advance and still accepts a valid count
    let (status, session) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/add-employees"),
        None,
        Some(json!({ "employee_count": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["step"], "payment");
}

#[tokio::test]
async fn company_scope_is_enforced_across_tenants() {
    let app = setup_app().await;

    let session_a = registration_at_payment_step(
        &app,
        "Tenant A",
        "a@tenants.test",
        "+15550108",
        1,
    )
    .await;
    let (_, complete_a) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_a}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    let token_a = complete_a["token"].as_str().unwrap().to_string();
    let company_a = complete_a["company_id"].as_str().unwrap().to_string();

    let session_b = registration_at_payment_step(
        &app,
        "Tenant B",
        "b@tenants.test",
        "+15550109",
        1,
    )
    .await;
    let (_, complete_b) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_b}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    let company_b = complete_b["company_id"].as_str().unwrap().to_string();

    // Own company: allowed
    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/companies/{company_a}"),
        Some(&token_a),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Another tenant: forbidden
    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/companies/{company_b}"),
        Some(&token_a),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");

    // Tenant listing is super-admin only
    let (status, _) = send(&app, "GET", "/api/companies", Some(&token_a), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Super admin sees both tenants
    let root_token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, companies) = send(&app, "GET", "/api/companies", Some(&root_token), None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = companies
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap())
        .collect();
    assert!(ids.contains(&company_a.as_str()));
    assert!(ids.contains(&company_b.as_str()));
}

#[tokio::test]
async fn login_logout_lifecycle() {
    let app = setup_app().await;

    // Wrong password
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": SUPER_ADMIN_EMAIL, "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    // Unknown account gets the same answer
    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "ghost@example.test", "password": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, _) = send(&app, "GET", "/api/companies", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, "POST", "/api/auth/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The revoked token no longer works
    let (status, _) = send(&app, "GET", "/api/companies", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn subdomain_request_review_flow() {
    let app = setup_app().await;

    let session_id = registration_at_payment_step(
        &app,
        "Subby Co",
        "subby@example.test",
        "+15550110",
        1,
    )
    .await;
    let (_, complete) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    let admin_token = complete["token"].as_str().unwrap().to_string();
    let company_id = complete["company_id"].as_str().unwrap().to_string();

    // Bad label
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/companies/{company_id}/subdomain"),
        Some(&admin_token),
        Some(json!({ "subdomain": "-nope-" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, company) = send(
        &app,
        "POST",
        &format!("/api/companies/{company_id}/subdomain"),
        Some(&admin_token),
        Some(json!({ "subdomain": "Subby" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["subdomain"], "subby");
    assert_eq!(company["subdomain_status"], "pending");

    // Re-requesting while one is pending conflicts
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/companies/{company_id}/subdomain"),
        Some(&admin_token),
        Some(json!({ "subdomain": "subby2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let root_token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, pending) = send(
        &app,
        "GET",
        "/api/admin/subdomain-requests",
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        pending
            .as_array()
            .unwrap()
            .iter()
            .any(|c| c["id"] == company_id.as_str())
    );

    let (status, reviewed) = send(
        &app,
        "POST",
        &format!("/api/admin/subdomain-requests/{company_id}/approve"),
        Some(&root_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reviewed["subdomain_status"], "approved");
    // Subdomain review never touches the lifecycle status
    assert_eq!(reviewed["status"], "pending");
}

#[tokio::test]
async fn super_admin_can_edit_company() {
    let app = setup_app().await;

    let session_id = registration_at_payment_step(
        &app,
        "Editable Co",
        "edit@example.test",
        "+15550111",
        1,
    )
    .await;
    let (_, complete) = send(
        &app,
        "POST",
        &format!("/api/registration/{session_id}/pay-offline"),
        None,
        Some(json!({})),
    )
    .await;
    let company_id = complete["company_id"].as_str().unwrap().to_string();
    let admin_token = complete["token"].as_str().unwrap().to_string();

    let root_token = login(&app, SUPER_ADMIN_EMAIL, SUPER_ADMIN_PASSWORD).await;
    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/companies/{company_id}"),
        Some(&root_token),
        Some(json!({ "status": "suspended", "max_employees": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "patch failed: {updated}");
    assert_eq!(updated["status"], "suspended");
    assert_eq!(updated["max_employees"], 5);

    // Company admins cannot use the edit endpoint
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/companies/{company_id}"),
        Some(&admin_token),
        Some(json!({ "status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn login_with_inactive_account_is_forbidden() {
    let (app, db) = setup().await;

    let now = Utc::now();
    user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set("parked@example.test".to_string()),
        password_hash: Set(hash_password("correct-horse-battery").unwrap()),
        name: Set("Parked Admin".to_string()),
        role: Set(user::UserRole::CompanyAdmin),
        company_id: Set(None),
        status: Set(user::UserStatus::Inactive),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await
    .expect("Failed to insert user");

    // The password is right, but the account is disabled
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "parked@example.test", "password": "correct-horse-battery" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
    assert!(body["token"].is_null());

    // The refused login minted no session
    let sessions = session::Entity::find().all(&db).await.unwrap();
    assert!(sessions.is_empty());
}

#[tokio::test]
async fn malformed_json_body_gets_problem_details() {
    let app = setup_app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/registration/start")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"company_name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/problem+json"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], "VALIDATION_FAILED");

    // Type mismatches take the same shape
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": "x@example.test", "password": 42 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn root_and_docs_are_public() {
    let app = setup_app().await;

    let (status, info) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["service"], "workforce-hrm");

    let (status, _) = send(&app, "GET", "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
