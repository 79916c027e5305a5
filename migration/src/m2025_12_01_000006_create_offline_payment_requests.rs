use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfflinePaymentRequest::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::CompanyId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::PlanId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OfflinePaymentRequest::Notes).string().null())
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::ApprovedBy)
                            .uuid()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::ApprovedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::RejectionReason)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(OfflinePaymentRequest::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offline_payment_requests_company_id")
                    .table(OfflinePaymentRequest::Table)
                    .col(OfflinePaymentRequest::CompanyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_offline_payment_requests_status")
                    .table(OfflinePaymentRequest::Table)
                    .col(OfflinePaymentRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(OfflinePaymentRequest::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum OfflinePaymentRequest {
    #[sea_orm(iden = "offline_payment_requests")]
    Table,
    Id,
    CompanyId,
    PlanId,
    Amount,
    Notes,
    Status,
    ApprovedBy,
    ApprovedAt,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
