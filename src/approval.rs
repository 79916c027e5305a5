//! # Approval Workflow
//!
//! Super-admin review of pending payments and subdomain requests. Approvals
//! and rejections are transactional and guarded by a compare-and-set on the
//! current status, so a second review of the same record conflicts instead of
//! silently overwriting the first.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use uuid::Uuid;

use crate::error::{ApiError, invalid_state, not_found, validation_error};
use crate::models::company::{self, CompanyStatus, SubdomainStatus};
use crate::models::offline_payment_request::{self, OfflineRequestStatus};
use crate::models::order::{self, OrderStatus};

/// Review decisions for payments and subdomain requests
pub struct ApprovalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApprovalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Approve an online payment order and activate its company.
    pub async fn approve_order(
        &self,
        order_id: Uuid,
        approver_id: Uuid,
    ) -> Result<order::Model, ApiError> {
        let txn = self.db.begin().await?;

        let existing = order::Entity::find_by_id(order_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found("Order not found"))?;

        let updated = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(OrderStatus::Completed))
            .col_expr(order::Column::ApprovedBy, Expr::value(Some(approver_id)))
            .col_expr(order::Column::ApprovedAt, Expr::value(Some(Utc::now())))
            .col_expr(order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(order::Column::Id.eq(order_id))
            .filter(order::Column::Status.eq(OrderStatus::Pending))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(invalid_state("Order has already been reviewed"));
        }

        activate_company(&txn, existing.company_id).await?;
        txn.commit().await?;

        tracing::info!(order_id = %order_id, approver_id = %approver_id, "Order approved");
        self.fetch_order(order_id).await
    }

    /// Reject an online payment order; the company is rejected with it.
    pub async fn reject_order(
        &self,
        order_id: Uuid,
        approver_id: Uuid,
        reason: &str,
    ) -> Result<order::Model, ApiError> {
        require_reason(reason)?;
        let txn = self.db.begin().await?;

        let existing = order::Entity::find_by_id(order_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found("Order not found"))?;

        let updated = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(OrderStatus::Rejected))
            .col_expr(order::Column::ApprovedBy, Expr::value(Some(approver_id)))
            .col_expr(order::Column::ApprovedAt, Expr::value(Some(Utc::now())))
            .col_expr(
                order::Column::RejectionReason,
                Expr::value(Some(reason.trim().to_string())),
            )
            .col_expr(order::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(order::Column::Id.eq(order_id))
            .filter(order::Column::Status.eq(OrderStatus::Pending))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(invalid_state("Order has already been reviewed"));
        }

        reject_company(&txn, existing.company_id).await?;
        txn.commit().await?;

        tracing::info!(order_id = %order_id, approver_id = %approver_id, "Order rejected");
        self.fetch_order(order_id).await
    }

    /// Approve an offline payment request and activate its company.
    pub async fn approve_offline_request(
        &self,
        request_id: Uuid,
        approver_id: Uuid,
    ) -> Result<offline_payment_request::Model, ApiError> {
        let txn = self.db.begin().await?;

        let existing = offline_payment_request::Entity::find_by_id(request_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found("Offline payment request not found"))?;

        let updated = offline_payment_request::Entity::update_many()
            .col_expr(
                offline_payment_request::Column::Status,
                Expr::value(OfflineRequestStatus::Approved),
            )
            .col_expr(
                offline_payment_request::Column::ApprovedBy,
                Expr::value(Some(approver_id)),
            )
            .col_expr(
                offline_payment_request::Column::ApprovedAt,
                Expr::value(Some(Utc::now())),
            )
            .col_expr(
                offline_payment_request::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(offline_payment_request::Column::Id.eq(request_id))
            .filter(offline_payment_request::Column::Status.eq(OfflineRequestStatus::Pending))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(invalid_state(
                "Offline payment request has already been reviewed",
            ));
        }

        activate_company(&txn, existing.company_id).await?;
        txn.commit().await?;

        tracing::info!(request_id = %request_id, approver_id = %approver_id, "Offline payment request approved");
        self.fetch_offline_request(request_id).await
    }

    /// Reject an offline payment request; the company is rejected with it.
    pub async fn reject_offline_request(
        &self,
        request_id: Uuid,
        approver_id: Uuid,
        reason: &str,
    ) -> Result<offline_payment_request::Model, ApiError> {
        require_reason(reason)?;
        let txn = self.db.begin().await?;

        let existing = offline_payment_request::Entity::find_by_id(request_id)
            .one(&txn)
            .await?
            .ok_or_else(|| not_found("Offline payment request not found"))?;

        let updated = offline_payment_request::Entity::update_many()
            .col_expr(
                offline_payment_request::Column::Status,
                Expr::value(OfflineRequestStatus::Rejected),
            )
            .col_expr(
                offline_payment_request::Column::ApprovedBy,
                Expr::value(Some(approver_id)),
            )
            .col_expr(
                offline_payment_request::Column::ApprovedAt,
                Expr::value(Some(Utc::now())),
            )
            .col_expr(
                offline_payment_request::Column::RejectionReason,
                Expr::value(Some(reason.trim().to_string())),
            )
            .col_expr(
                offline_payment_request::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(offline_payment_request::Column::Id.eq(request_id))
            .filter(offline_payment_request::Column::Status.eq(OfflineRequestStatus::Pending))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(invalid_state(
                "Offline payment request has already been reviewed",
            ));
        }

        reject_company(&txn, existing.company_id).await?;
        txn.commit().await?;

        tracing::info!(request_id = %request_id, approver_id = %approver_id, "Offline payment request rejected");
        self.fetch_offline_request(request_id).await
    }

    /// Approve a tenant's subdomain request. Touches only the subdomain
    /// review state, never the company lifecycle status.
    pub async fn approve_subdomain(&self, company_id: Uuid) -> Result<company::Model, ApiError> {
        self.review_subdomain(company_id, SubdomainStatus::Approved)
            .await
    }

    /// Reject a tenant's subdomain request.
    pub async fn reject_subdomain(&self, company_id: Uuid) -> Result<company::Model, ApiError> {
        self.review_subdomain(company_id, SubdomainStatus::Rejected)
            .await
    }

    async fn review_subdomain(
        &self,
        company_id: Uuid,
        outcome: SubdomainStatus,
    ) -> Result<company::Model, ApiError> {
        company::Entity::find_by_id(company_id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found("Company not found"))?;

        let updated = company::Entity::update_many()
            .col_expr(
                company::Column::SubdomainStatus,
                Expr::value(Some(outcome)),
            )
            .col_expr(company::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(company::Column::Id.eq(company_id))
            .filter(company::Column::SubdomainStatus.eq(SubdomainStatus::Pending))
            .exec(self.db)
            .await?;
        if updated.rows_affected == 0 {
            return Err(invalid_state("No pending subdomain request for this company"));
        }

        company::Entity::find_by_id(company_id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found("Company not found"))
    }

    async fn fetch_order(&self, order_id: Uuid) -> Result<order::Model, ApiError> {
        order::Entity::find_by_id(order_id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found("Order not found"))
    }

    async fn fetch_offline_request(
        &self,
        request_id: Uuid,
    ) -> Result<offline_payment_request::Model, ApiError> {
        offline_payment_request::Entity::find_by_id(request_id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found("Offline payment request not found"))
    }
}

/// Flip a pending company to active. Companies already past review keep
/// their current status.
async fn activate_company<C: sea_orm::ConnectionTrait>(
    conn: &C,
    company_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    company::Entity::update_many()
        .col_expr(company::Column::Status, Expr::value(CompanyStatus::Active))
        .col_expr(company::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(company::Column::Id.eq(company_id))
        .filter(company::Column::Status.eq(CompanyStatus::Pending))
        .exec(conn)
        .await?;
    Ok(())
}

async fn reject_company<C: sea_orm::ConnectionTrait>(
    conn: &C,
    company_id: Uuid,
) -> Result<(), sea_orm::DbErr> {
    company::Entity::update_many()
        .col_expr(company::Column::Status, Expr::value(CompanyStatus::Rejected))
        .col_expr(company::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(company::Column::Id.eq(company_id))
        .filter(company::Column::Status.eq(CompanyStatus::Pending))
        .exec(conn)
        .await?;
    Ok(())
}

fn require_reason(reason: &str) -> Result<(), ApiError> {
    if reason.trim().is_empty() {
        Err(validation_error(
            "Rejection reason is required",
            serde_json::json!({ "reason": "Must not be empty" }),
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

    use crate::models::plan;

    async fn test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        Migrator::up(&db, None).await.expect("Migration failed");
        db
    }

    async fn seed_pending_order(db: &DatabaseConnection) -> (Uuid, Uuid) {
        let now = Utc::now();
        let plan = plan::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("basic".to_string()),
            display_name: Set("Basic".to_string()),
            price: Set(5000),
            duration_months: Set(12),
            employees_included: Set(10),
            price_per_additional_employee: Set(50),
            max_employees: Set(50),
            features: Set(serde_json::json!(["attendance"])),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert plan");

        let company = company::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set("Acme".to_string()),
            email: Set("acme@example.com".to_string()),
            phone: Set("+4930".to_string()),
            plan_id: Set(plan.id),
            max_employees: Set(50),
            status: Set(CompanyStatus::Pending),
            subdomain: Set(None),
            subdomain_status: Set(None),
            subdomain_requested_at: Set(None),
            logo_url: Set(None),
            primary_color: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert company");

        let order = order::ActiveModel {
            id: Set(Uuid::new_v4()),
            company_id: Set(company.id),
            plan_id: Set(plan.id),
            amount: Set(5000),
            status: Set(OrderStatus::Pending),
            approved_by: Set(None),
            approved_at: Set(None),
            rejection_reason: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(db)
        .await
        .expect("Failed to insert order");

        (order.id, company.id)
    }

    #[tokio::test]
    async fn approve_completes_order_and_activates_company() {
        let db = test_db().await;
        let (order_id, company_id) = seed_pending_order(&db).await;
        let approver = Uuid::new_v4();

        let approved = ApprovalService::new(&db)
            .approve_order(order_id, approver)
            .await
            .unwrap();
        assert_eq!(approved.status, OrderStatus::Completed);
        assert_eq!(approved.approved_by, Some(approver));
        assert!(approved.approved_at.is_some());

        let company = company::Entity::find_by_id(company_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(company.status, CompanyStatus::Active);
    }

    #[tokio::test]
    async fn second_approval_conflicts() {
        let db = test_db().await;
        let (order_id, _) = seed_pending_order(&db).await;
        let service = ApprovalService::new(&db);

        service.approve_order(order_id, Uuid::new_v4()).await.unwrap();
        let err = service
            .approve_order(order_id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.code, Box::from("INVALID_STATE"));
    }

    #[tokio::test]
    async fn reject_requires_reason_and_marks_company_rejected() {
        let db = test_db().await;
        let (order_id, company_id) = seed_pending_order(&db).await;
        let service = ApprovalService::new(&db);

        let err = service
            .reject_order(order_id, Uuid::new_v4(), "  ")
            .await
            .unwrap_err();
        assert_eq!(err.code, Box::from("VALIDATION_FAILED"));

        let rejected = service
            .reject_order(order_id, Uuid::new_v4(), "Card declined")
            .await
            .unwrap();
        assert_eq!(rejected.status, OrderStatus::Rejected);
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Card declined"));

        let company = company::Entity::find_by_id(company_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(company.status, CompanyStatus::Rejected);
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let db = test_db().await;
        let err = ApprovalService::new(&db)
            .approve_order(Uuid::new_v4(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert_eq!(err.code, Box::from("NOT_FOUND"));
    }

    #[tokio::test]
    async fn subdomain_review_leaves_company_status_alone() {
        let db = test_db().await;
        let (_, company_id) = seed_pending_order(&db).await;

        let company = company::Entity::find_by_id(company_id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        crate::repositories::CompanyRepository::new(&db)
            .request_subdomain(company, "acme".to_string())
            .await
            .unwrap();

        let service = ApprovalService::new(&db);
        let reviewed = service.approve_subdomain(company_id).await.unwrap();
        assert_eq!(reviewed.subdomain_status, Some(SubdomainStatus::Approved));
        assert_eq!(reviewed.status, CompanyStatus::Pending);

        let err = service.reject_subdomain(company_id).await.unwrap_err();
        assert_eq!(err.code, Box::from("INVALID_STATE"));
    }
}
