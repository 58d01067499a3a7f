use async_trait::async_trait;

use super::domain::{Company, CompanyInput};
use crate::errors::ServiceError;
use crate::repository::Repository;

/// Repository abstraction for company persistence. On top of the generic
/// capability it adds the email lookup the login check needs.
#[async_trait]
pub trait CompanyRepository: Repository<Record = Company, Draft = CompanyInput> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Company>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples.
pub mod mock {
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Rows are kept in insertion order, which stands in for the
    /// storage-native order of the real database.
    #[derive(Default)]
    pub struct MockCompanyRepository {
        rows: Mutex<Vec<Company>>,
    }

    impl MockCompanyRepository {
        /// Insert behind the service's back; lets tests prove that a read
        /// was served from the cache rather than from storage.
        pub fn raw_insert(&self, company: Company) {
            self.rows.lock().unwrap().push(company);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl Repository for MockCompanyRepository {
        type Record = Company;
        type Draft = CompanyInput;

        async fn find_all(&self) -> Result<Vec<Company>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn save(&self, id: Option<Uuid>, draft: CompanyInput) -> Result<Company, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match id {
                None => {
                    let created = Company::from_draft(Uuid::new_v4(), draft);
                    rows.push(created.clone());
                    Ok(created)
                }
                Some(id) => {
                    let slot = rows
                        .iter_mut()
                        .find(|c| c.id == id)
                        .ok_or_else(|| ServiceError::not_found("company"))?;
                    *slot = Company::from_draft(id, draft);
                    Ok(slot.clone())
                }
            }
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().retain(|c| c.id != id);
            Ok(())
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<Company>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.email == email).cloned())
        }
    }
}
