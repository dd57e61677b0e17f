//! Backend entry-point: wires the school CRUD endpoints, health probes, and
//! structured logging.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use shuttle_backend::inbound::http::health::{self, HealthState};
use shuttle_backend::inbound::http::schools;
use shuttle_backend::inbound::http::state::HttpState;
use shuttle_backend::outbound::persistence::InMemorySchoolStore;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "shuttle-backend", about = "School resource service")]
struct Cli {
    /// Address the HTTP listener binds to.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
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

    let cli = Cli::parse();

    let state = web::Data::new(HttpState::new(Arc::new(InMemorySchoolStore::new())));
    let health_state = web::Data::new(HealthState::new());
    // Clones for the server factory so the readiness flip below keeps a handle.
    let server_state = state.clone();
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_state.clone())
            .app_data(server_health_state.clone())
            .configure(schools::configure)
            .service(health::ready)
            .service(health::live)
    })
    .bind(cli.bind.as_str())?;

    info!(bind = %cli.bind, "school service listening");
    health_state.mark_ready();
    server.run().await
}
