//! Create `company` table.
//!
//! `email` and `tax_id` carry no unique constraint; duplicates are accepted
//! by the schema as-is.
use sea_orm_migration::{prelude::*, schema::*};

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
                    .col(uuid(Company::Id).primary_key())
                    .col(string_len(Company::Name, 50).not_null())
                    .col(string_len(Company::TaxId, 32).not_null())
                    .col(big_integer(Company::PlanId).not_null())
                    .col(string_len(Company::Phone, 32).not_null())
                    .col(string_len(Company::Email, 255).not_null())
                    .col(string_len(Company::Password, 255).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Id, Name, TaxId, PlanId, Phone, Email, Password }
