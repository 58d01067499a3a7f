use crate::crud::CrudService;

/// Site CRUD is exactly the shared surface; nothing is added on top.
pub type SiteService<R> = CrudService<R>;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use super::SiteService;
    use crate::cache::ListCache;
    use crate::company::domain::CompanyInput;
    use crate::company::repository::mock::MockCompanyRepository;
    use crate::company::service::CompanyService;
    use crate::errors::ServiceError;
    use crate::site::domain::{Site, SiteInput};
    use crate::site::repository::mock::MockSiteRepository;

    fn shop(owner: Uuid) -> SiteInput {
        SiteInput { nickname: "Shop".into(), url: "https://shop.example.com".into(), owner }
    }

    fn service() -> (Arc<MockSiteRepository>, SiteService<MockSiteRepository>) {
        let repo = Arc::new(MockSiteRepository::default());
        let svc = SiteService::new(Arc::clone(&repo), ListCache::new("sites"), "site");
        (repo, svc)
    }

    fn company_service() -> CompanyService<MockCompanyRepository> {
        CompanyService::new(Arc::new(MockCompanyRepository::default()), ListCache::new("companies"))
    }

    fn acme() -> CompanyInput {
        CompanyInput {
            name: "Acme".into(),
            tax_id: "123".into(),
            plan_id: 1,
            phone: "555".into(),
            email: "a@x.com".into(),
            password: "s3cr3t".into(),
        }
    }

    #[tokio::test]
    async fn site_crud_round_trip() {
        let (_repo, svc) = service();
        let owner = Uuid::new_v4();

        let created = svc.create(shop(owner)).await.unwrap();
        assert_eq!(created, Site::from_draft(created.id, shop(owner)));
        assert_eq!(svc.show(created.id).await.unwrap(), created);
        assert_eq!(svc.list().await.unwrap(), vec![created.clone()]);

        let mut replacement = shop(owner);
        replacement.nickname = "Storefront".into();
        let updated = svc.update(created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.nickname, "Storefront");

        svc.delete(created.id).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
        assert!(matches!(svc.show(created.id).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let (_repo, svc) = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.show(id).await.unwrap_err(), ServiceError::NotFound(_)));
        assert!(matches!(svc.update(id, shop(id)).await.unwrap_err(), ServiceError::NotFound(_)));
        assert!(matches!(svc.delete(id).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload() {
        let (repo, svc) = service();
        let input = SiteInput { nickname: "".into(), url: "nope".into(), owner: Uuid::new_v4() };
        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(repo.is_empty());
    }

    // Documents current behavior: nothing prevents a site from outliving
    // the company it points at.
    #[tokio::test]
    async fn deleting_the_owner_leaves_a_dangling_site() {
        let companies = company_service();
        let (_site_repo, sites) = service();

        let owner = companies.create(acme()).await.unwrap();
        let site = sites.create(shop(owner.id)).await.unwrap();

        companies.delete(owner.id).await.unwrap();

        let listed = sites.list().await.unwrap();
        assert_eq!(listed, vec![site.clone()]);
        assert_eq!(listed[0].owner, owner.id);
        assert!(matches!(companies.show(owner.id).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn cache_regions_are_isolated_per_resource() {
        let company_repo = Arc::new(MockCompanyRepository::default());
        let companies =
            CompanyService::new(Arc::clone(&company_repo), ListCache::new("companies"));
        let (_site_repo, sites) = service();

        let owner = companies.create(acme()).await.unwrap();
        assert_eq!(companies.list().await.unwrap().len(), 1);

        // Stale row invisible to the cached company list...
        let mut ghost = acme();
        ghost.email = "ghost@x.com".into();
        company_repo.raw_insert(crate::company::domain::Company::from_draft(Uuid::new_v4(), ghost));

        // ...and site writes must not evict the company region.
        sites.create(shop(owner.id)).await.unwrap();
        sites.delete(sites.list().await.unwrap()[0].id).await.unwrap();
        assert_eq!(companies.list().await.unwrap().len(), 1);

        // A company write does evict it.
        companies.delete(owner.id).await.unwrap();
        assert_eq!(companies.list().await.unwrap().len(), 1); // the ghost row remains
    }
}
