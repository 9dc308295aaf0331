//! Student records entry-point: loads settings, prepares the document store
//! and serves the REST API, probes and browser client.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use student_records::inbound::http::health::HealthState;
use student_records::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use student_records::settings::AppSettings;

/// Apply migrations then open the connection pool.
async fn prepare_store(database_url: &str, max_connections: u32) -> color_eyre::Result<DbPool> {
    let url = database_url.to_owned();
    let applied = web::block(move || run_pending_migrations(&url))
        .await
        .wrap_err("migration task failed")?
        .wrap_err("failed to migrate document store")?;
    info!(applied, "document store schema is current");

    let config = PoolConfig::new(database_url).with_max_size(max_connections);
    DbPool::new(config)
        .await
        .wrap_err("failed to build document store pool")
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(url) = settings.database_url() {
        let pool = prepare_store(url, settings.max_connections()).await?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("server terminated with an error")
}
