use cg_server::error::Result as ServerErrorResult;
use cg_server::logger::{self, LogSink};
use cg_server::{AppState, build_router};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load and validate configuration
    let config = cg_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let sink = LogSink::from_config(config.log_file_path()?, config.logging.colored);
    logger::initialize(config.logging.level, sink)?;

    info!("Starting cg-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let state = AppState::from_config(&config).await?;
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await
        }
    }
}
