/*!
# PPI Network Analysis Service

Builds undirected protein-protein interaction networks from STRING or BioGRID
records and ranks proteins by degree centrality.

This library provides:
- Graph construction with self-loop filtering and unordered-edge deduplication
- Whole-network statistics (node count, edge count, density)
- Degree centrality ranking with a deterministic lexicographic tie-break
- Retrieval and schema normalization for the STRING and BioGRID web services
*/

pub mod algorithms;
pub mod client;
pub mod error;
pub mod graph;
pub mod models;
pub mod server;

pub use algorithms::{degree_centrality, network_stats, top_proteins};
pub use client::PpiClient;
pub use error::{PpiError, Result};
pub use graph::{Edge, Graph};
pub use models::*;
