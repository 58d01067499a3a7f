use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use service::company::domain::{Company, CompanyInput, LoginInput};
use service::company::repo::seaorm::SeaOrmCompanyRepository;
use service::company::service::CompanyService;

use crate::errors::ApiError;
use crate::links::Linked;
use crate::startup::ServerState;

/// Services are cheap per-request shells over the shared connection and the
/// long-lived cache region held in state.
fn companies(state: &ServerState) -> CompanyService<SeaOrmCompanyRepository> {
    CompanyService::new(
        Arc::new(SeaOrmCompanyRepository { db: state.db.clone() }),
        state.company_cache.clone(),
    )
}

fn with_links(company: Company) -> Linked<Company> {
    Linked::new("company", company.id, company)
}

pub async fn index(State(state): State<ServerState>) -> Result<Json<Vec<Company>>, ApiError> {
    let list = companies(&state).list().await?;
    Ok(Json(list))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CompanyInput>,
) -> Result<(StatusCode, Json<Linked<Company>>), ApiError> {
    info!(name = %input.name, "registering company");
    let created = companies(&state).create(input).await?;
    Ok((StatusCode::CREATED, Json(with_links(created))))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Linked<Company>>, ApiError> {
    info!(%id, "fetching company");
    let company = companies(&state).show(id).await?;
    Ok(Json(with_links(company)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<CompanyInput>,
) -> Result<Json<Linked<Company>>, ApiError> {
    info!(%id, "updating company");
    let updated = companies(&state).update(id, input).await?;
    Ok(Json(with_links(updated)))
}

pub async fn destroy(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!(%id, "deleting company");
    companies(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<Linked<Company>>, ApiError> {
    info!(email = %input.email, "login attempt");
    let company = companies(&state).login(input).await?;
    Ok(Json(with_links(company)))
}
