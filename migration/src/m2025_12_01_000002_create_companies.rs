use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Company::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Company::Name).string().not_null())
                    .col(ColumnDef::new(Company::Email).string().not_null())
                    .col(ColumnDef::new(Company::Phone).string().not_null())
                    .col(ColumnDef::new(Company::PlanId).uuid().not_null())
                    .col(ColumnDef::new(Company::MaxEmployees).integer().not_null())
                    .col(ColumnDef::new(Company::Status).string().not_null())
                    .col(ColumnDef::new(Company::Subdomain).string().null())
                    .col(ColumnDef::new(Company::SubdomainStatus).string().null())
                    .col(
                        ColumnDef::new(Company::SubdomainRequestedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(Company::LogoUrl).string().null())
                    .col(ColumnDef::new(Company::PrimaryColor).string().null())
                    .col(
                        ColumnDef::new(Company::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Company::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Email and phone are globally unique across tenants.
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_email")
                    .table(Company::Table)
                    .col(Company::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_phone")
                    .table(Company::Table)
                    .col(Company::Phone)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_status")
                    .table(Company::Table)
                    .col(Company::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Company {
    #[sea_orm(iden = "companies")]
    Table,
    Id,
    Name,
    Email,
    Phone,
    PlanId,
    MaxEmployees,
    Status,
    Subdomain,
    SubdomainStatus,
    SubdomainRequestedAt,
    LogoUrl,
    PrimaryColor,
    CreatedAt,
    UpdatedAt,
}
