// Word embeddings: the lookup capability, cosine similarity and a
// file-backed vector table.

pub mod similarity;
pub mod table;
pub mod traits;

pub use similarity::cosine_similarity;
pub use table::VectorTable;
pub use traits::Embedder;
