use anyhow::Result;
use clap::Parser;
use leafreader_models::GatewayClient;
use leafreader_server::{AppConfig, AppState, create_router, init_logging};
use std::{path::PathBuf, sync::Arc};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Leafreader screenshot reading server", long_about = None)]
struct Args {
    /// Configuration file layered over the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind (overrides the configuration file)
    #[arg(long)]
    host: Option<String>,

    /// Port to run the server on (overrides the configuration file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging).map_err(|e| anyhow::anyhow!("{}", e))?;
    debug!(config_file = ?args.config, ?config, "Configuration loaded");

    let state = match config.gateway.connect() {
        Some(gateway) => AppState::new(Arc::new(GatewayClient::new(gateway))),
        None => {
            warn!(
                env = %config.gateway.api_key_env,
                "Upstream credential not set; every request will fail with a configuration error"
            );
            AppState::unconfigured()
        }
    };

    let app = create_router(state, config.server.body_limit_bytes);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        address = %address,
        model = %config.gateway.model,
        "Starting leafreader server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
