use std::collections::{BTreeSet, HashSet};

/// An undirected edge between two distinct proteins.
///
/// Endpoints are stored in lexicographic order so that `{a, b}` and `{b, a}`
/// compare and hash identically, which makes deduplication in a `HashSet`
/// order-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    source: String,
    target: String,
}

impl Edge {
    /// Creates a new edge from two endpoints, normalizing their order.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                source: a,
                target: b,
            }
        } else {
            Self {
                source: b,
                target: a,
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns whether the edge touches the given protein.
    pub fn contains(&self, protein: &str) -> bool {
        self.source == protein || self.target == protein
    }
}

/// An undirected simple graph of protein interactions.
///
/// Built once from reported interaction pairs and read-only afterwards; the
/// statistics and ranking passes never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeSet<String>,
    edges: HashSet<Edge>,
}

impl Graph {
    /// Builds a graph from a sequence of reported interaction pairs.
    ///
    /// Self-reported pairs (`u == v`) never become edges, but their endpoint
    /// is still registered as a node: the protein was reported as interacting
    /// and must show up in statistics and rankings even when isolated.
    /// Duplicate pairs, in either endpoint order, collapse to a single edge.
    /// An empty input yields an empty graph.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut nodes = BTreeSet::new();
        let mut edges = HashSet::new();

        for (a, b) in pairs {
            if a == b {
                nodes.insert(a);
                continue;
            }

            nodes.insert(a.clone());
            nodes.insert(b.clone());
            edges.insert(Edge::new(a, b));
        }

        Self { nodes, edges }
    }

    /// Returns the proteins in the graph, in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, protein: &str) -> bool {
        self.nodes.contains(protein)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Returns the number of distinct edges incident to the given protein.
    pub fn degree(&self, protein: &str) -> usize {
        self.edges.iter().filter(|e| e.contains(protein)).count()
    }
}
