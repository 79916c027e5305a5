//! # Offline Payment Request Repository
//!
//! Database operations for bank transfer / invoice payment requests awaiting
//! manual review.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::models::offline_payment_request::{
    self, Entity as OfflinePaymentRequest, Model, OfflineRequestStatus,
};

/// Repository for offline payment request database operations
pub struct OfflinePaymentRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfflinePaymentRequestRepository<'a> {
    /// Create a new OfflinePaymentRequestRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List requests, optionally restricted to one status, newest first
    pub async fn list(
        &self,
        status: Option<OfflineRequestStatus>,
    ) -> Result<Vec<Model>, sea_orm::DbErr> {
        let mut query =
            OfflinePaymentRequest::find().order_by_desc(offline_payment_request::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(offline_payment_request::Column::Status.eq(status));
        }
        query.all(self.db).await
    }
}
