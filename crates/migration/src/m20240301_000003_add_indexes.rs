use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Company: index on email for the login lookup (non-unique)
        manager
            .create_index(
                Index::create()
                    .name("idx_company_email")
                    .table(Company::Table)
                    .col(Company::Email)
                    .to_owned(),
            )
            .await?;

        // Site: index on owner_id
        manager
            .create_index(
                Index::create()
                    .name("idx_site_owner")
                    .table(Site::Table)
                    .col(Site::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_company_email").table(Company::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_site_owner").table(Site::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Email }

#[derive(DeriveIden)]
enum Site { Table, OwnerId }
