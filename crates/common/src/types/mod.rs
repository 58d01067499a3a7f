use serde::Serialize;

/// Health check payload returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
}
