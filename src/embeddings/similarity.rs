// Cosine similarity between word vectors, the edge weight of the
// similarity graph.

/// Cosine similarity between two vectors, in [-1.0, 1.0].
///
/// Degenerate input (empty vectors, mismatched dimensions, or a zero norm
/// on either side) gives 0.0 rather than NaN. Unlike a topic-overlap score,
/// opposite directions are kept negative here; the ranker decides what to do
/// with them.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot / (mag_a * mag_b)).clamp(-1.0, 1.0)
}
