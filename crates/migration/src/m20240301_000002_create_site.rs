//! Create `site` table.
//!
//! `owner_id` carries no foreign key; a row may outlive the company it
//! points at.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Site::Table)
                    .if_not_exists()
                    .col(uuid(Site::Id).primary_key())
                    .col(string_len(Site::Nickname, 50).not_null())
                    .col(string_len(Site::Url, 255).not_null())
                    .col(uuid(Site::OwnerId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Site::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Site { Table, Id, Nickname, Url, OwnerId }
