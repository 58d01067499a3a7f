use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::cache::ListCache;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::validate::Validate;

/// Uniform CRUD surface, instantiated once per resource type.
///
/// The full-list read goes through the resource's cache region; every write
/// evicts that region after the storage call succeeds, so a later list never
/// reads stale data. Regions of different resource types are independent.
pub struct CrudService<R: Repository> {
    repo: Arc<R>,
    cache: ListCache<R::Record>,
    entity: &'static str,
}

impl<R: Repository> CrudService<R>
where
    R::Draft: Validate,
{
    pub fn new(repo: Arc<R>, cache: ListCache<R::Record>, entity: &'static str) -> Self {
        Self { repo, cache, entity }
    }

    /// All records, unfiltered, in storage-native order, served from the
    /// cache region once populated.
    pub async fn list(&self) -> Result<Vec<R::Record>, ServiceError> {
        let repo = Arc::clone(&self.repo);
        self.cache.get_or_compute(|| async move { repo.find_all().await }).await
    }

    pub async fn create(&self, draft: R::Draft) -> Result<R::Record, ServiceError> {
        let violations = draft.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }
        let created = self.repo.save(None, draft).await?;
        self.cache.evict().await;
        info!(entity = self.entity, "record created");
        Ok(created)
    }

    pub async fn show(&self, id: Uuid) -> Result<R::Record, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(self.entity))
    }

    /// Full replace under the path id. The draft carries no id of its own,
    /// so whatever the client sent in the body cannot override the path.
    pub async fn update(&self, id: Uuid, draft: R::Draft) -> Result<R::Record, ServiceError> {
        self.ensure_exists(id).await?;
        let violations = draft.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }
        let updated = self.repo.save(Some(id), draft).await?;
        self.cache.evict().await;
        info!(entity = self.entity, %id, "record replaced");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.ensure_exists(id).await?;
        self.repo.delete_by_id(id).await?;
        self.cache.evict().await;
        info!(entity = self.entity, %id, "record deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found(self.entity))
    }
}
