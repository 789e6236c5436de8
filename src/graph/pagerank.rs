// Weighted PageRank by power iteration.
//
// Each step a walker follows an outgoing edge with probability `damping`
// (chosen in proportion to edge weight) or teleports to a uniformly random
// node. Nodes with no positive outgoing weight are dangling: their mass is
// spread evenly over every node, so the ranks always sum to 1.0.
//
// Only the positive part of an edge weight is followed. Cosine similarity
// can be negative, and a negative transition probability would let ranks go
// below zero.

use anyhow::Result;
use tracing::debug;

use super::builder::SimilarityGraph;

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Damping factor and convergence tolerance for `pagerank`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankParams {
    /// Probability of following an edge rather than teleporting
    pub damping: f64,
    /// Iteration stops once the summed absolute rank change drops below this
    pub tolerance: f64,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl RankParams {
    /// Reject parameters for which the iteration would not converge.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            anyhow::bail!(
                "Damping factor must be in [0, 1), got {}",
                self.damping
            );
        }
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            anyhow::bail!(
                "Convergence tolerance must be a positive number, got {}",
                self.tolerance
            );
        }
        Ok(())
    }
}

/// Scores per node (indexed like the graph's terms) and how many iterations
/// it took to converge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOutcome {
    pub scores: Vec<f64>,
    pub iterations: usize,
}

/// Run PageRank over `graph`.
///
/// An empty graph gives no scores and a single node gets 1.0; neither runs
/// the iteration.
pub fn pagerank(graph: &SimilarityGraph, params: &RankParams) -> RankOutcome {
    let n = graph.node_count();
    match n {
        0 => return RankOutcome::default(),
        1 => {
            return RankOutcome {
                scores: vec![1.0],
                iterations: 0,
            }
        }
        _ => {}
    }

    let damping = params.damping;
    let inverse = 1.0 / n as f64;

    // Transition shares: for each source, (target, weight / outflow) over the
    // positive edges. An empty list marks a dangling node.
    let transitions: Vec<Vec<(usize, f64)>> = (0..n)
        .map(|source| {
            let edges = graph.edges(source);
            let outflow: f64 = edges.iter().map(|e| e.weight.max(0.0)).sum();
            if outflow <= 0.0 {
                return Vec::new();
            }
            edges
                .iter()
                .filter(|e| e.weight > 0.0)
                .map(|e| (e.target, e.weight / outflow))
                .collect()
        })
        .collect();

    let mut ranks = vec![inverse; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;

    loop {
        let dangling: f64 = transitions
            .iter()
            .zip(&ranks)
            .filter(|(shares, _)| shares.is_empty())
            .map(|(_, rank)| rank)
            .sum();

        let base = (1.0 - damping) * inverse + damping * dangling * inverse;
        next.fill(base);

        for (source, shares) in transitions.iter().enumerate() {
            let flow = damping * ranks[source];
            for &(target, share) in shares {
                next[target] += flow * share;
            }
        }

        let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
        std::mem::swap(&mut ranks, &mut next);
        iterations += 1;

        if delta < params.tolerance {
            break;
        }
    }

    debug!(nodes = n, iterations, "PageRank converged");

    RankOutcome {
        scores: ranks,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn graph(entries: &[(&str, Vec<f64>)]) -> SimilarityGraph {
        let table: HashMap<String, Vec<f64>> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let terms: Vec<String> = entries.iter().map(|(k, _)| k.to_string()).collect();
        SimilarityGraph::build(&terms, &table)
    }

    #[test]
    fn test_empty_graph() {
        let outcome = pagerank(&SimilarityGraph::default(), &RankParams::default());
        assert!(outcome.scores.is_empty());
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn test_single_node_gets_all_mass() {
        let g = graph(&[("solo", vec![1.0, 0.0])]);
        let outcome = pagerank(&g, &RankParams::default());
        assert_eq!(outcome.scores, vec![1.0]);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn test_two_connected_nodes_split_evenly() {
        let g = graph(&[("a", vec![1.0, 0.0]), ("b", vec![1.0, 0.1])]);
        let outcome = pagerank(&g, &RankParams::default());
        assert!((outcome.scores[0] - 0.5).abs() < 1e-9);
        assert!((outcome.scores[1] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_dangling_is_uniform() {
        // Mutually orthogonal vectors: every edge has weight 0
        let g = graph(&[
            ("a", vec![1.0, 0.0, 0.0]),
            ("b", vec![0.0, 1.0, 0.0]),
            ("c", vec![0.0, 0.0, 1.0]),
        ]);
        let outcome = pagerank(&g, &RankParams::default());
        for score in &outcome.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hub_ranks_highest() {
        // "hub" is similar to every spoke; spokes are orthogonal to each other
        let g = graph(&[
            ("hub", vec![1.0, 1.0, 1.0]),
            ("x", vec![1.0, 0.0, 0.0]),
            ("y", vec![0.0, 1.0, 0.0]),
            ("z", vec![0.0, 0.0, 1.0]),
        ]);
        let outcome = pagerank(&g, &RankParams::default());
        let hub = outcome.scores[0];
        assert!(outcome.scores[1..].iter().all(|&s| s < hub));
    }

    #[test]
    fn test_mass_is_conserved_with_negative_weights() {
        let g = graph(&[
            ("a", vec![1.0, 0.2, -0.3]),
            ("b", vec![-1.0, 0.5, 0.0]),
            ("c", vec![0.3, -0.8, 0.9]),
            ("d", vec![0.0, 0.0, 0.0]),
            ("e", vec![0.7, 0.7, 0.1]),
        ]);
        let outcome = pagerank(&g, &RankParams::default());
        let total: f64 = outcome.scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "Ranks sum to {total}");
        assert!(outcome.scores.iter().all(|&s| s >= 0.0));
    }

    #[test]
    fn test_deterministic() {
        let g = graph(&[
            ("a", vec![0.3, 0.1]),
            ("b", vec![0.2, 0.9]),
            ("c", vec![0.8, 0.4]),
        ]);
        let first = pagerank(&g, &RankParams::default());
        let second = pagerank(&g, &RankParams::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_validate_params() {
        assert!(RankParams::default().validate().is_ok());
        let bad_damping = RankParams {
            damping: 1.0,
            ..RankParams::default()
        };
        assert!(bad_damping.validate().is_err());
        let bad_tolerance = RankParams {
            tolerance: 0.0,
            ..RankParams::default()
        };
        assert!(bad_tolerance.validate().is_err());
    }
}
