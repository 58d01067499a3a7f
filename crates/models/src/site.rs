use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::company;

/// Site row. `owner_id` has no FK; it may point at a deleted company.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub nickname: String,
    pub url: String,
    pub owner_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::OwnerId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
