use db::config::DbConfig;
use dotenvy::dotenv;
use http_server::{core::AppState, router};
use std::env;
use std::net::SocketAddr;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from a .env file.
    dotenv().ok();
    // Use a JSON logger for production-ready structured logging
    tracing_subscriber::fmt().json().init();

    // --- Configuration ---
    let db_config = match DbConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };
    let port = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8000);

    // --- Axum Router ---
    let app = router(AppState { db: db_config });

    // --- Start HTTP Server ---
    // Bind to 0.0.0.0 to be reachable in a container
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("HTTP Server listening on {}", addr);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            return Err(e.into());
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }

    Ok(())
}
