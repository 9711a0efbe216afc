//! Storefront entry point: loads settings, wires repositories and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_http_state, create_server};
use storefront::inbound::http::health::HealthState;
use storefront::settings::AppSettings;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let state = build_http_state(&settings).await?;
    let config = ServerConfig::new(settings.bind_addr(), state);

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
