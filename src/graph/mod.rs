// Similarity graph construction and centrality ranking.

pub mod builder;
pub mod pagerank;

pub use builder::{Edge, SimilarityGraph};
pub use pagerank::{pagerank, RankOutcome, RankParams};
