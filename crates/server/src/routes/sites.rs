use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use service::site::domain::{Site, SiteInput};
use service::site::repo::seaorm::SeaOrmSiteRepository;
use service::site::service::SiteService;

use crate::errors::ApiError;
use crate::startup::ServerState;

fn sites(state: &ServerState) -> SiteService<SeaOrmSiteRepository> {
    SiteService::new(
        Arc::new(SeaOrmSiteRepository { db: state.db.clone() }),
        state.site_cache.clone(),
        "site",
    )
}

pub async fn index(State(state): State<ServerState>) -> Result<Json<Vec<Site>>, ApiError> {
    let list = sites(&state).list().await?;
    Ok(Json(list))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<SiteInput>,
) -> Result<(StatusCode, Json<Site>), ApiError> {
    info!(nickname = %input.nickname, "registering site");
    let created = sites(&state).create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn show(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Site>, ApiError> {
    info!(%id, "fetching site");
    let site = sites(&state).show(id).await?;
    Ok(Json(site))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SiteInput>,
) -> Result<Json<Site>, ApiError> {
    info!(%id, "updating site");
    let updated = sites(&state).update(id, input).await?;
    Ok(Json(updated))
}

pub async fn destroy(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    info!(%id, "deleting site");
    sites(&state).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
