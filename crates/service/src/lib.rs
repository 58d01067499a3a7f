//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access behind a repository capability.
//! - Validation runs before any storage call.
//! - One cache region per resource type fronts the "list all" reads.

pub mod cache;
pub mod company;
pub mod crud;
pub mod errors;
pub mod repository;
pub mod site;
pub mod validate;
