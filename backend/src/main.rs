//! Service entry-point: loads settings, prepares the point store, and serves
//! the geometry endpoint.

mod server;

use std::ffi::OsString;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use geojson_points::domain::GeometryRequestService;
use geojson_points::inbound::http::health::HealthState;
use geojson_points::inbound::http::state::HttpState;
use geojson_points::outbound::persistence::{
    DbPool, DieselSpatialStore, MigrationError, PoolConfig, apply_migrations, truncate_points,
};
use geojson_points::settings::AppSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let database_url = settings.database_url()?.to_owned();
    let default_srid = settings.default_srid().map_err(std::io::Error::other)?;

    prepare_store(database_url.clone(), settings.reset_on_startup).await?;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(settings.pool_max_size()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let service = GeometryRequestService::new(Arc::new(DieselSpatialStore::new(pool)), default_srid);

    let bind_addr = settings.bind_addr();
    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        default_srid = default_srid.get(),
        "starting geometry service"
    );

    let config = ServerConfig::new(bind_addr).with_payload_limit(settings.payload_limit());
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, HttpState::new(Arc::new(service)), config)?.await
}

fn load_settings<I>(args: I) -> std::io::Result<AppSettings>
where
    I: IntoIterator<Item = OsString>,
{
    AppSettings::load_from_iter(args)
        .map_err(|err| std::io::Error::other(format!("failed to load settings: {err}")))
}

/// Apply migrations and optionally truncate stored points on a blocking thread.
async fn prepare_store(database_url: String, reset: bool) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || -> Result<(), MigrationError> {
        apply_migrations(&database_url)?;
        if reset {
            warn!("reset_on_startup is set; truncating stored points");
            truncate_points(&database_url)?;
        }
        Ok(())
    })
    .await
    .map_err(|err| std::io::Error::other(format!("store preparation task failed: {err}")))?
    .map_err(|err| std::io::Error::other(err.to_string()))
}
