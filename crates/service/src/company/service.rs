use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{Company, CompanyInput, LoginInput};
use super::repository::CompanyRepository;
use crate::cache::ListCache;
use crate::crud::CrudService;
use crate::errors::ServiceError;

/// Company business service independent of web framework.
///
/// CRUD goes through the shared surface; login is the one capability this
/// resource carries on top of it.
pub struct CompanyService<R: CompanyRepository> {
    crud: CrudService<R>,
    repo: Arc<R>,
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>, cache: ListCache<Company>) -> Self {
        Self { crud: CrudService::new(Arc::clone(&repo), cache, "company"), repo }
    }

    pub async fn list(&self) -> Result<Vec<Company>, ServiceError> {
        self.crud.list().await
    }

    pub async fn create(&self, draft: CompanyInput) -> Result<Company, ServiceError> {
        self.crud.create(draft).await
    }

    pub async fn show(&self, id: Uuid) -> Result<Company, ServiceError> {
        self.crud.show(id).await
    }

    pub async fn update(&self, id: Uuid, draft: CompanyInput) -> Result<Company, ServiceError> {
        self.crud.update(id, draft).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.crud.delete(id).await
    }

    /// One-shot credential check; returns the stored record on success.
    /// The password comparison is byte equality against the stored value,
    /// and the failure is the same whether the email is unknown or the
    /// password does not match.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<Company, ServiceError> {
        let company = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(ServiceError::Unauthorized)?;
        if company.password != input.password {
            return Err(ServiceError::Unauthorized);
        }
        info!(company_id = %company.id, "login succeeded");
        Ok(company)
    }
}
