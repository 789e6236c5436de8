// Keysieve: embedding-aware keyword extraction
//
// This is the library root. A document is normalized into a bag of words,
// the words are joined into a graph weighted by word-vector cosine
// similarity, and PageRank over that graph ranks the most central terms.

pub mod baseline;
pub mod config;
pub mod embeddings;
pub mod graph;
pub mod keywords;
pub mod output;
pub mod sieve;
pub mod text;

pub use embeddings::{Embedder, VectorTable};
pub use keywords::Keywords;
pub use sieve::Sieve;
pub use text::{BagOfWords, StopwordSet, WordTokenizer};
