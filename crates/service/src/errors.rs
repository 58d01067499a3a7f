use thiserror::Error;

use crate::validate::Violation;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {}", fmt_violations(.0))]
    Validation(Vec<Violation>),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid email or password")]
    Unauthorized,
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

fn fmt_violations(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
