//! Site persistence is exactly the generic `Repository` capability; no
//! extra lookups are needed.

/// Simple in-memory mock repository for tests and doc examples.
pub mod mock {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::errors::ServiceError;
    use crate::repository::Repository;
    use crate::site::domain::{Site, SiteInput};

    /// Rows are kept in insertion order, which stands in for the
    /// storage-native order of the real database.
    #[derive(Default)]
    pub struct MockSiteRepository {
        rows: Mutex<Vec<Site>>,
    }

    impl MockSiteRepository {
        /// Insert behind the service's back; lets tests prove that a read
        /// was served from the cache rather than from storage.
        pub fn raw_insert(&self, site: Site) {
            self.rows.lock().unwrap().push(site);
        }

        pub fn len(&self) -> usize {
            self.rows.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl Repository for MockSiteRepository {
        type Record = Site;
        type Draft = SiteInput;

        async fn find_all(&self) -> Result<Vec<Site>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Site>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }

        async fn save(&self, id: Option<Uuid>, draft: SiteInput) -> Result<Site, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            match id {
                None => {
                    let created = Site::from_draft(Uuid::new_v4(), draft);
                    rows.push(created.clone());
                    Ok(created)
                }
                Some(id) => {
                    let slot = rows
                        .iter_mut()
                        .find(|s| s.id == id)
                        .ok_or_else(|| ServiceError::not_found("site"))?;
                    *slot = Site::from_draft(id, draft);
                    Ok(slot.clone())
                }
            }
        }

        async fn delete_by_id(&self, id: Uuid) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().retain(|s| s.id != id);
            Ok(())
        }
    }
}
