// Keywords: the ranked result of one extraction call.
//
// Two parallel sequences, sorted ascending by ranking: the least central
// term comes first and the most central last. `top` and `rank_map` give the
// views callers usually want.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keywords {
    /// Unique normalized terms; `tokens[i]` is scored by `rankings[i]`
    pub tokens: Vec<String>,
    /// Centrality scores, ascending
    pub rankings: Vec<f64>,
}

impl Keywords {
    /// Pair `tokens` with `rankings` and sort both by ascending ranking.
    ///
    /// Whichever sequence is longer is truncated to the other's length. The
    /// sort is stable, so equal rankings keep their input order.
    pub fn assemble(tokens: Vec<String>, rankings: Vec<f64>) -> Self {
        let mut pairs: Vec<(String, f64)> = tokens.into_iter().zip(rankings).collect();
        pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (tokens, rankings) = pairs.into_iter().unzip();
        Self { tokens, rankings }
    }

    pub fn len(&self) -> usize {
        self.tokens.len().min(self.rankings.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (term, ranking) pairs in stored (ascending) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.rankings.iter().copied())
    }

    /// The `n` most central terms, highest ranking first.
    pub fn top(&self, n: usize) -> Vec<(&str, f64)> {
        let mut pairs: Vec<(&str, f64)> = self.iter().collect();
        pairs.reverse();
        pairs.truncate(n);
        pairs
    }

    /// Term -> ranking lookup.
    pub fn rank_map(&self) -> HashMap<String, f64> {
        self.iter()
            .map(|(term, rank)| (term.to_string(), rank))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_assemble_sorts_ascending() {
        let kw = Keywords::assemble(strings(&["a", "b", "c"]), vec![0.5, 0.2, 0.3]);
        assert_eq!(kw.tokens, strings(&["b", "c", "a"]));
        assert_eq!(kw.rankings, vec![0.2, 0.3, 0.5]);
    }

    #[test]
    fn test_assemble_truncates_extra_rankings() {
        let kw = Keywords::assemble(strings(&["a", "b"]), vec![0.4, 0.6, 0.0, 0.0]);
        assert_eq!(kw.tokens.len(), 2);
        assert_eq!(kw.rankings, vec![0.4, 0.6]);
    }

    #[test]
    fn test_assemble_ties_keep_input_order() {
        let kw = Keywords::assemble(strings(&["x", "y", "z"]), vec![0.25, 0.5, 0.25]);
        assert_eq!(kw.tokens, strings(&["x", "z", "y"]));
    }

    #[test]
    fn test_top_is_descending() {
        let kw = Keywords::assemble(strings(&["a", "b", "c"]), vec![0.1, 0.6, 0.3]);
        let top = kw.top(2);
        assert_eq!(top, vec![("b", 0.6), ("c", 0.3)]);
    }

    #[test]
    fn test_top_more_than_len() {
        let kw = Keywords::assemble(strings(&["a"]), vec![1.0]);
        assert_eq!(kw.top(10).len(), 1);
    }

    #[test]
    fn test_rank_map() {
        let kw = Keywords::assemble(strings(&["a", "b"]), vec![0.7, 0.3]);
        let map = kw.rank_map();
        assert_eq!(map.len(), 2);
        assert!((map["a"] - 0.7).abs() < f64::EPSILON);
        assert!((map["b"] - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty() {
        let kw = Keywords::assemble(Vec::new(), Vec::new());
        assert!(kw.is_empty());
        assert!(kw.rank_map().is_empty());
    }

    #[test]
    fn test_serializes_as_parallel_arrays() {
        let kw = Keywords::assemble(strings(&["a"]), vec![1.0]);
        let json = serde_json::to_string(&kw).unwrap();
        assert_eq!(json, r#"{"tokens":["a"],"rankings":[1.0]}"#);
    }
}
