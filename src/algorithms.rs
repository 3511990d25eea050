use crate::graph::Graph;
use crate::models::{CentralityScore, NetworkStats};
use std::collections::HashMap;
use tracing::{debug, info};

/// Computes node count, edge count and density for the given network.
///
/// Density of an undirected simple graph is `2E / (V * (V - 1))`. With fewer
/// than two nodes there is no pair of distinct nodes to connect, so density
/// is reported as 0 rather than NaN.
pub fn network_stats(graph: &Graph) -> NetworkStats {
    let nodes = graph.node_count();
    let edges = graph.edge_count();

    let density = if nodes < 2 {
        0.0
    } else {
        (2 * edges) as f64 / (nodes * (nodes - 1)) as f64
    };

    debug!(nodes, edges, density, "computed network statistics");

    NetworkStats {
        nodes,
        edges,
        density,
    }
}

/// Computes the degree centrality of every node in the network.
///
/// Centrality of a node is its degree divided by `V - 1`, the number of other
/// nodes it could connect to. When the graph has at most one node every
/// centrality is 0.
pub fn degree_centrality(graph: &Graph) -> HashMap<String, f64> {
    let node_count = graph.node_count();

    let mut degrees: HashMap<String, usize> =
        graph.nodes().map(|name| (name.to_string(), 0)).collect();

    // Single pass over the edge set; every endpoint is guaranteed to be in
    // the node set.
    for edge in graph.edges() {
        for endpoint in [edge.source(), edge.target()] {
            if let Some(degree) = degrees.get_mut(endpoint) {
                *degree += 1;
            }
        }
    }

    degrees
        .into_iter()
        .map(|(name, degree)| {
            let score = if node_count <= 1 {
                0.0
            } else {
                degree as f64 / (node_count - 1) as f64
            };
            (name, score)
        })
        .collect()
}

/// Returns the `top_n` proteins ranked by degree centrality.
///
/// Scores are sorted in descending order; proteins with equal scores are
/// ordered by ascending name so results are reproducible across runs. The
/// result holds `min(top_n, V)` entries and `top_n == 0` yields an empty
/// ranking.
pub fn top_proteins(graph: &Graph, top_n: usize) -> Vec<CentralityScore> {
    let mut scores: Vec<CentralityScore> = degree_centrality(graph)
        .into_iter()
        .map(|(protein, score)| CentralityScore { protein, score })
        .collect();

    scores.sort_unstable_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.protein.cmp(&b.protein))
    });
    scores.truncate(top_n);

    info!(
        requested = top_n,
        returned = scores.len(),
        nodes = graph.node_count(),
        "ranked proteins by degree centrality"
    );

    scores
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(raw: &[(&str, &str)]) -> Graph {
        Graph::from_pairs(
            raw.iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn stats_for_empty_graph() {
        let stats = network_stats(&graph(&[]));

        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.density, 0.0);
    }

    #[test]
    fn stats_for_single_node() {
        let stats = network_stats(&graph(&[("X", "X")]));

        assert_eq!(stats.nodes, 1);
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.density, 0.0);
    }

    #[test]
    fn density_matches_formula() {
        // Nodes {A, B, C}, edges {{A,B}, {A,C}} after the reversed duplicate
        // collapses: density = 2 * 2 / (3 * 2).
        let stats = network_stats(&graph(&[("A", "B"), ("B", "A"), ("A", "C")]));

        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.edges, 2);
        assert!((stats.density - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn density_of_complete_pair_is_one() {
        let stats = network_stats(&graph(&[("A", "B")]));

        assert_eq!(stats.density, 1.0);
    }

    #[test]
    fn centrality_is_zero_for_singleton() {
        let scores = degree_centrality(&graph(&[("X", "X")]));

        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("X"), Some(&0.0));
    }

    #[test]
    fn centrality_normalized_by_other_nodes() {
        let scores = degree_centrality(&graph(&[("A", "B"), ("A", "C"), ("A", "D")]));

        assert_eq!(scores.get("A"), Some(&1.0));
        assert_eq!(scores.get("B"), Some(&(1.0 / 3.0)));
        assert_eq!(scores.get("C"), Some(&(1.0 / 3.0)));
        assert_eq!(scores.get("D"), Some(&(1.0 / 3.0)));
    }

    #[test]
    fn isolated_node_scores_zero() {
        let scores = degree_centrality(&graph(&[("A", "B"), ("X", "X")]));

        assert_eq!(scores.get("X"), Some(&0.0));
        assert_eq!(scores.get("A"), Some(&0.5));
    }

    #[test]
    fn ranking_sorts_descending_with_lexicographic_ties() {
        let ranked = top_proteins(&graph(&[("A", "B"), ("A", "C"), ("A", "D")]), 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].protein, "A");
        assert_eq!(ranked[0].score, 1.0);
        // B, C and D all score 1/3; B wins the tie by name.
        assert_eq!(ranked[1].protein, "B");
        assert!((ranked[1].score - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn ranking_is_non_increasing() {
        let ranked = top_proteins(
            &graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A"), ("A", "C")]),
            10,
        );

        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ranking_caps_at_node_count() {
        let pairs: Vec<(&str, &str)> = vec![
            ("P1", "P2"),
            ("P3", "P4"),
            ("P5", "P6"),
            ("P7", "P8"),
            ("P9", "P10"),
        ];
        let ranked = top_proteins(&graph(&pairs), 100);

        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn ranking_with_zero_requested_is_empty() {
        let ranked = top_proteins(&graph(&[("A", "B")]), 0);

        assert!(ranked.is_empty());
    }

    #[test]
    fn ranking_of_empty_graph_is_empty() {
        let ranked = top_proteins(&graph(&[]), 5);

        assert!(ranked.is_empty());
    }

    #[test]
    fn singleton_ranks_with_zero_score() {
        let ranked = top_proteins(&graph(&[("X", "X")]), 1);

        assert_eq!(
            ranked,
            vec![CentralityScore {
                protein: "X".to_string(),
                score: 0.0
            }]
        );
    }
}
