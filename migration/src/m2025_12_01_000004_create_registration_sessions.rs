use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegistrationSession::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RegistrationSession::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::CompanyName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::AdminName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::Email)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::Phone)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RegistrationSession::PlanId).uuid().null())
                    .col(
                        ColumnDef::new(RegistrationSession::EmployeeCount)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::Step)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(RegistrationSession::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for TTL cleanup of abandoned sessions.
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_sessions_expires_at")
                    .table(RegistrationSession::Table)
                    .col(RegistrationSession::ExpiresAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegistrationSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RegistrationSession {
    #[sea_orm(iden = "registration_sessions")]
    Table,
    Id,
    CompanyName,
    AdminName,
    Email,
    Phone,
    PasswordHash,
    PlanId,
    EmployeeCount,
    Step,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
