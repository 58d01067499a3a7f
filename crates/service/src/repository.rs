use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Storage capability the CRUD services are polymorphic over.
///
/// `save(None, draft)` inserts and assigns a fresh id; `save(Some(id), draft)`
/// replaces every field of the record under that id. `delete_by_id` is a
/// no-op when the id is absent; the existence check lives in the service.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Clone + Send + Sync + 'static;
    type Draft: Send + 'static;

    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Self::Record>, ServiceError>;
    async fn save(&self, id: Option<Uuid>, draft: Self::Draft) -> Result<Self::Record, ServiceError>;
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError>;
}
