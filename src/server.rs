use crate::algorithms::{network_stats, top_proteins};
use crate::client::PpiClient;
use crate::error::{PpiError, Result};
use crate::graph::Graph;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ClientConfig};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

/// Application state containing the interaction database client
#[derive(Clone)]
pub struct AppState {
    client: Arc<PpiClient>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = PpiClient::new(config)?;

        Ok(Self {
            client: Arc::new(client),
        })
    }
}

/// Create the HTTP server with the analysis endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analyze", post(analyze_endpoint))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "ppi-network-rs"
    }))
}

/// Network analysis endpoint: retrieve, build, rank
async fn analyze_endpoint(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let start = Instant::now();

    match run_analysis(&state, &request).await {
        Ok(mut response) => {
            response.execution_time_ms = start.elapsed().as_millis();
            info!(
                protein = %response.protein,
                nodes = response.stats.nodes,
                edges = response.stats.edges,
                execution_time_ms = response.execution_time_ms,
                "network analysis completed"
            );
            Json(response).into_response()
        }
        Err(e) => {
            error!("network analysis failed: {}", e);
            handle_error(e).into_response()
        }
    }
}

async fn run_analysis(state: &AppState, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
    if request.protein.trim().is_empty() {
        return Err(PpiError::invalid_parameter("protein id must not be empty"));
    }
    // The ranking itself tolerates 0, but an analysis asking for no proteins
    // is a caller mistake.
    if request.top_n == 0 {
        return Err(PpiError::invalid_parameter("top_n must be at least 1"));
    }

    let pairs = state
        .client
        .fetch_interactions(request.protein.trim(), request.database)
        .await?;

    let graph = Graph::from_pairs(pairs);
    let stats = network_stats(&graph);
    let ranked = top_proteins(&graph, request.top_n);

    Ok(AnalyzeResponse {
        protein: request.protein.trim().to_string(),
        database: request.database.to_string(),
        stats,
        top_proteins: ranked,
        execution_time_ms: 0,
    })
}

/// Convert errors to HTTP responses
fn handle_error(error: PpiError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, message) = match &error {
        PpiError::Request(_) => (StatusCode::BAD_GATEWAY, "Interaction database request failed"),
        PpiError::NoInteractions { .. } => (StatusCode::NOT_FOUND, "No interactions found"),
        PpiError::SchemaMismatch { .. } => (
            StatusCode::BAD_GATEWAY,
            "Unexpected interaction database response",
        ),
        PpiError::InvalidParameter { .. } => (StatusCode::BAD_REQUEST, "Invalid parameter"),
        PpiError::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Serialization error"),
        PpiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };

    (
        status,
        Json(json!({
            "error": message,
            "details": error.to_string()
        })),
    )
}
