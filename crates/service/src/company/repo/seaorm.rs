use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::company::domain::{Company, CompanyInput};
use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;
use crate::repository::Repository;

pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

fn to_domain(row: models::company::Model) -> Company {
    Company {
        id: row.id,
        name: row.name,
        tax_id: row.tax_id,
        plan_id: row.plan_id,
        phone: row.phone,
        email: row.email,
        password: row.password,
    }
}

fn to_active(id: Uuid, draft: CompanyInput) -> models::company::ActiveModel {
    models::company::ActiveModel {
        id: Set(id),
        name: Set(draft.name),
        tax_id: Set(draft.tax_id),
        plan_id: Set(draft.plan_id),
        phone: Set(draft.phone),
        email: Set(draft.email),
        password: Set(draft.password),
    }
}

#[async_trait::async_trait]
impl Repository for SeaOrmCompanyRepository {
    type Record = Company;
    type Draft = CompanyInput;

    async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
        let rows = models::company::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, ServiceError> {
        let row = models::company::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(row.map(to_domain))
    }

    async fn save(&self, id: Option<Uuid>, draft: CompanyInput) -> Result<Company, ServiceError> {
        let saved = match id {
            None => to_active(Uuid::new_v4(), draft).insert(&self.db).await,
            // Full replace: every column overwritten under the path id.
            Some(id) => to_active(id, draft).update(&self.db).await,
        }
        .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(to_domain(saved))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
        models::company::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, ServiceError> {
        // Emails are not unique in the schema; first match wins.
        let row = models::company::Entity::find()
            .filter(models::company::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Repository(e.to_string()))?;
        Ok(row.map(to_domain))
    }
}
