use std::error::Error;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database;
use mergington::services::seed_service;
use mergington::web::{self, AppState};

#[tokio::main]
async fn main() {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;

    // 2. Seed the roster and open the store
    let seed = seed_service::resolve_roster(config.seed_path.as_deref())?;
    let store = database::open_store(config.database_url.as_deref(), seed).await?;

    // 3. Router
    let app = web::router(AppState::new(store), &config.assets_dir);

    // 4. Bind, falling back to the next port
    let addr = config.bind_addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("could not bind {}: {}; trying fallback {}", addr, e, fallback);
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving activities on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
