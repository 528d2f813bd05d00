//! Backend entry-point: loads settings, seeds the stores and serves HTTP.

use actix_web::dev::ServerHandle;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use books::inbound::http::health::HealthState;
use books::server::{ServerSettings, create_server};

/// Fail both probes and stop accepting work once Ctrl-C arrives.
async fn drain_on_interrupt(health_state: web::Data<HealthState>, handle: ServerHandle) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!("interrupt received, draining");
            health_state.begin_drain();
            handle.stop(true).await;
        }
        Err(error) => warn!(%error, "interrupt listener unavailable"),
    }
}

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

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &settings)?;
    actix_web::rt::spawn(drain_on_interrupt(health_state, server.handle()));
    server.await
}
