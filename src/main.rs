//! apikey-auth server.
//!
//! Serves `/health` publicly and `/whoami` behind
//! `Authorization: ApiKey <token>`.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use apikey_auth::config::{load_config, ServiceConfig};
use apikey_auth::lifecycle::{wait_for_signal, Shutdown};
use apikey_auth::observability::init_logging;
use apikey_auth::HttpServer;

#[derive(Parser)]
#[command(name = "apikey-auth", version, about = "HTTP service guarded by ApiKey authentication")]
struct Args {
    /// Path to a TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    init_logging(&config.observability);

    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        auth_enabled = config.auth.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::select! {
        result = &mut server_task => result??,
        _ = wait_for_signal(&shutdown) => server_task.await??,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
