//! Site resource: same CRUD surface as company, scoped to its own cache
//! region, with no login concept.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::SiteService;
