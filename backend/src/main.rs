//! Backend entry-point: loads settings, initialises tracing and runs the
//! HTTP server.

use actix_web::web;
use color_eyre::eyre::WrapErr;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use bloglist::config::AppSettings;
use bloglist::inbound::http::health::HealthState;

mod server;

use server::{ServerConfig, create_server};

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

    let settings =
        AppSettings::load_from_iter(std::env::args_os()).wrap_err("load configuration")?;
    let config = ServerConfig::try_from(&settings).wrap_err("validate configuration")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("start HTTP server")?;
    server.await.wrap_err("HTTP server terminated")?;
    Ok(())
}
