// Embedder trait, a swap-ready abstraction over word-vector providers.
//
// The extractor never owns a global table; whatever supplies vectors is
// injected at construction. A GloVe-style file (`VectorTable`), a plain
// HashMap, or any closure can stand in.

use std::collections::HashMap;

/// Trait for looking up a word vector for a normalized term.
///
/// `None` is a normal answer meaning "no vector for this term"; the term
/// is skipped, not treated as an error. Implementations must be
/// deterministic for a given term and return vectors of one dimensionality.
pub trait Embedder: Send + Sync {
    fn embed(&self, term: &str) -> Option<Vec<f64>>;
}

impl<F> Embedder for F
where
    F: Fn(&str) -> Option<Vec<f64>> + Send + Sync,
{
    fn embed(&self, term: &str) -> Option<Vec<f64>> {
        self(term)
    }
}

impl Embedder for HashMap<String, Vec<f64>> {
    fn embed(&self, term: &str) -> Option<Vec<f64>> {
        self.get(term).cloned()
    }
}
