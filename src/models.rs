use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction database to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Database {
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "BioGRID")]
    BioGrid,
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "STRING"),
            Self::BioGrid => write!(f, "BioGRID"),
        }
    }
}

/// Request for a network analysis run
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub protein: String,
    #[serde(default = "default_database")]
    pub database: Database,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

/// Whole-network structural statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NetworkStats {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
}

/// A protein paired with its normalized degree centrality in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityScore {
    pub protein: String,
    pub score: f64,
}

/// Response for a network analysis run
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub protein: String,
    pub database: String,
    pub stats: NetworkStats,
    pub top_proteins: Vec<CentralityScore>,
    pub execution_time_ms: u128,
}

/// Configuration for the interaction database clients
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub string_api_url: String,
    pub biogrid_api_url: String,
    pub biogrid_access_key: String,
    /// NCBI taxonomy id restricting results to one species.
    pub species: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            string_api_url: "https://string-db.org/api/json/network".to_string(),
            biogrid_api_url: "https://webservice.thebiogrid.org/interactions/".to_string(),
            biogrid_access_key: String::new(),
            species: 9606,
        }
    }
}

// Default values for serde
fn default_database() -> Database {
    Database::String
}

fn default_top_n() -> usize {
    5
}
