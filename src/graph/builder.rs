// Similarity graph over the filtered terms of one document.
//
// Node i is the i-th term that has a word vector. Every ordered pair of
// distinct nodes is joined by a directed edge carrying the cosine
// similarity of the two vectors. The graph is complete, symmetric in
// weight, and free of self loops. Terms without a vector never become
// nodes.

use tracing::debug;

use crate::embeddings::{cosine_similarity, Embedder};

/// A directed, weighted edge to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: usize,
    /// Cosine similarity, in [-1.0, 1.0]
    pub weight: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    /// Node labels; `terms[i]` is node i
    terms: Vec<String>,
    /// Outgoing edges per node
    edges: Vec<Vec<Edge>>,
}

impl SimilarityGraph {
    /// Build the graph for `terms`, looking each one up exactly once.
    ///
    /// O(n²) similarity evaluations for n embeddable terms.
    pub fn build(terms: &[String], embedder: &dyn Embedder) -> Self {
        let (terms, vectors): (Vec<String>, Vec<Vec<f64>>) = terms
            .iter()
            .filter_map(|term| embedder.embed(term).map(|v| (term.clone(), v)))
            .unzip();

        let n = terms.len();
        let mut edges: Vec<Vec<Edge>> = (0..n)
            .map(|_| Vec::with_capacity(n.saturating_sub(1)))
            .collect();

        for i in 0..n {
            for j in (i + 1)..n {
                let weight = cosine_similarity(&vectors[i], &vectors[j]);
                edges[i].push(Edge { target: j, weight });
                edges[j].push(Edge { target: i, weight });
            }
        }

        debug!(nodes = n, edges = n * n.saturating_sub(1), "Built similarity graph");

        Self { terms, edges }
    }

    pub fn node_count(&self) -> usize {
        self.terms.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }

    /// Outgoing edges of `node`; empty when `node` is out of range.
    pub fn edges(&self, node: usize) -> &[Edge] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Weight of the edge `from -> to`, if there is one.
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.edges
            .get(from)?
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table(entries: &[(&str, Vec<f64>)]) -> HashMap<String, Vec<f64>> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_complete_graph_without_self_loops() {
        let embed = table(&[
            ("a", vec![1.0, 0.0]),
            ("b", vec![0.0, 1.0]),
            ("c", vec![1.0, 1.0]),
        ]);
        let graph = SimilarityGraph::build(&terms(&["a", "b", "c"]), &embed);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 6);
        for node in 0..3 {
            assert!(graph.edges(node).iter().all(|e| e.target != node));
        }
    }

    #[test]
    fn test_weights_are_symmetric_cosines() {
        let embed = table(&[("a", vec![1.0, 0.0]), ("c", vec![1.0, 1.0])]);
        let graph = SimilarityGraph::build(&terms(&["a", "c"]), &embed);

        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((graph.weight(0, 1).unwrap() - expected).abs() < 1e-10);
        assert_eq!(graph.weight(0, 1), graph.weight(1, 0));
    }

    #[test]
    fn test_terms_without_vectors_are_dropped() {
        let embed = table(&[("a", vec![1.0, 0.0]), ("c", vec![0.0, 1.0])]);
        let graph = SimilarityGraph::build(&terms(&["a", "b", "c"]), &embed);

        assert_eq!(graph.terms(), &["a".to_string(), "c".to_string()]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_zero_vector_gets_zero_weight() {
        let embed = table(&[("a", vec![1.0, 0.0]), ("z", vec![0.0, 0.0])]);
        let graph = SimilarityGraph::build(&terms(&["a", "z"]), &embed);

        assert_eq!(graph.weight(0, 1), Some(0.0));
    }

    #[test]
    fn test_out_of_range_node_has_no_edges() {
        let embed = table(&[("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])]);
        let graph = SimilarityGraph::build(&terms(&["a", "b"]), &embed);

        assert!(graph.edges(2).is_empty());
        assert_eq!(graph.weight(5, 0), None);
    }

    #[test]
    fn test_single_term_has_no_edges() {
        let embed = table(&[("a", vec![1.0, 0.0])]);
        let graph = SimilarityGraph::build(&terms(&["a"]), &embed);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_each_term_embedded_once() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = AtomicUsize::new(0);
        let embed = |_: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(vec![1.0, 0.0])
        };
        let graph = SimilarityGraph::build(&terms(&["a", "b", "c", "d"]), &embed);

        assert_eq!(graph.node_count(), 4);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
