use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::site::domain::{Site, SiteInput};

pub struct SeaOrmSiteRepository {
    pub db: DatabaseConnection,
}

fn to_domain(row: models::site::Model) -> Site {
    Site { id: row.id, nickname: row.nickname, url: row.url, owner: row.owner_id }
}

fn to_active(id: Uuid, draft: SiteInput) -> models::site::ActiveModel {
    models::site::ActiveModel {
        id: Set(id),
        nickname: Set(draft.nickname),
        url: Set(draft.url),
        owner_id: Set(draft.owner),
    }
}

#[async_trait::async_trait]
impl Repository for SeaOrmSiteRepository {
    type Record = Site;
    type Draft = SiteInput;

    async fn find_all(&self) -> Result<Vec<Site>, ServiceError> {
        let rows = models::site::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Site>, ServiceError> {
        let row = models::site::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(row.map(to_domain))
    }

    async fn save(&self, id: Option<Uuid>, draft: SiteInput) -> Result<Site, ServiceError> {
        let saved = match id {
            None => to_active(Uuid::new_v4(), draft).insert(&self.db).await,
            // Full replace: every column overwritten under the path id.
            Some(id) => to_active(id, draft).update(&self.db).await,
        }
        .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(to_domain(saved))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        models::site::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(())
    }
}
