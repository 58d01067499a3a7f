use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::cache::ListCache;
use service::company::domain::Company;
use service::site::domain::Site;

use crate::routes;

/// Shared state: one database handle plus the long-lived cache region for
/// each resource type. Handlers build their service per request on top of
/// these; the regions must outlive any single request.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub company_cache: ListCache<Company>,
    pub site_cache: ListCache<Site>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            company_cache: ListCache::new("companies"),
            site_cache: ListCache::new("sites"),
        }
    }
}

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // DB connection and schema
    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = ServerState::new(db);

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = load_bind_addr()?;
    info!(%addr, "starting heatwise server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
