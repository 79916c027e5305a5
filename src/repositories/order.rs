//! # Order Repository
//!
//! Database operations for online payment orders.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::models::order::{self, Entity as Order, Model, OrderStatus};

/// Repository for Order database operations
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Create a new OrderRepository with the given database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// List orders, optionally restricted to one status, newest first
    pub async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<Model>, sea_orm::DbErr> {
        let mut query = Order::find().order_by_desc(order::Column::CreatedAt);
        if let Some(status) = status {
            query = query.filter(order::Column::Status.eq(status));
        }
        query.all(self.db).await
    }
}
