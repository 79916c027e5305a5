use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Plan::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Plan::Name).string().not_null())
                    .col(ColumnDef::new(Plan::DisplayName).string().not_null())
                    .col(ColumnDef::new(Plan::Price).big_integer().not_null())
                    .col(ColumnDef::new(Plan::DurationMonths).integer().not_null())
                    .col(
                        ColumnDef::new(Plan::EmployeesIncluded)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Plan::PricePerAdditionalEmployee)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Plan::MaxEmployees).integer().not_null())
                    .col(ColumnDef::new(Plan::Features).json_binary().not_null())
                    .col(
                        ColumnDef::new(Plan::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Plan::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Plan::UpdatedAt)
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
                    .name("idx_plans_name")
                    .table(Plan::Table)
                    .col(Plan::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Plan {
    #[sea_orm(iden = "plans")]
    Table,
    Id,
    Name,
    DisplayName,
    Price,
    DurationMonths,
    EmployeesIncluded,
    PricePerAdditionalEmployee,
    MaxEmployees,
    Features,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
