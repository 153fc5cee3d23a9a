//! Sensyx Web Server
//!
//! Run with: cargo run -p sensyx-web

use std::net::SocketAddr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sensyx_common::ExplorerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Sensyx Web Server...");

    // Config from SENSYX_CONFIG when set, built-in defaults otherwise
    let config = ExplorerConfig::load()?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Generate the snapshot once; handlers only ever read it
    let state = sensyx_web::state::AppState::new(config);

    // Build router
    let app = sensyx_web::router::build_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
