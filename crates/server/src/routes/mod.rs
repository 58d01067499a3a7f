use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::startup::ServerState;

pub mod companies;
pub mod sites;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the two resource surfaces.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let company_routes = Router::new()
        .route("/company", get(companies::index).post(companies::create))
        .route("/company/login", post(companies::login))
        .route(
            "/company/:id",
            get(companies::show).put(companies::update).delete(companies::destroy),
        );

    let site_routes = Router::new()
        .route("/site", get(sites::index).post(sites::create))
        .route("/site/:id", get(sites::show).put(sites::update).delete(sites::destroy));

    Router::new()
        .route("/health", get(health))
        .merge(company_routes)
        .merge(site_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
