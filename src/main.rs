use ppi_network::models::ClientConfig;
use ppi_network::server;
use std::env;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ppi_network=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    info!("Starting PPI Network Analysis Service");

    // Load configuration from environment variables
    let defaults = ClientConfig::default();
    let config = ClientConfig {
        string_api_url: env::var("STRING_API_URL").unwrap_or(defaults.string_api_url),
        biogrid_api_url: env::var("BIOGRID_API_URL").unwrap_or(defaults.biogrid_api_url),
        biogrid_access_key: env::var("BIOGRID_ACCESS_KEY").unwrap_or(defaults.biogrid_access_key),
        species: env::var("SPECIES_TAX_ID")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.species),
    };

    info!(
        "Using STRING at {}, BioGRID at {}, species {}",
        config.string_api_url, config.biogrid_api_url, config.species
    );

    // Create application state
    let state = server::AppState::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

    // Create router
    let app = server::create_router(state);

    // Start server
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3005".to_string());
    info!("Server starting on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind TCP listener: {}", e))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;
    info!("Server stopped");

    Ok(())
}
