use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::embeddings::table::default_vectors_path;
use crate::graph::RankParams;
use crate::text::StopwordSet;

/// Central configuration loaded from environment variables.
///
/// The binary loads a .env file first via dotenvy; command-line flags
/// override whatever is set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Word-vector file in GloVe / word2vec text format
    pub vectors_path: PathBuf,
    /// Stopword language name, or "none"
    pub stopword_language: String,
    /// PageRank damping factor and convergence tolerance
    pub rank_params: RankParams,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only malformed numbers are an error.
    pub fn load() -> Result<Self> {
        let vectors_path = env::var("KEYSIEVE_VECTORS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_vectors_path());

        let stopword_language =
            env::var("KEYSIEVE_STOPWORDS").unwrap_or_else(|_| "english".to_string());

        let defaults = RankParams::default();
        let rank_params = RankParams {
            damping: parse_f64_var("KEYSIEVE_DAMPING")?.unwrap_or(defaults.damping),
            tolerance: parse_f64_var("KEYSIEVE_TOLERANCE")?.unwrap_or(defaults.tolerance),
        };
        rank_params
            .validate()
            .context("Invalid KEYSIEVE_DAMPING / KEYSIEVE_TOLERANCE")?;

        Ok(Self {
            vectors_path,
            stopword_language,
            rank_params,
        })
    }

    /// Build the stopword set for the configured language.
    pub fn stopwords(&self) -> Result<StopwordSet> {
        StopwordSet::for_language(&self.stopword_language)
    }

    /// Check that the vector file exists.
    /// Call this before anything that needs word embeddings.
    pub fn require_vectors(&self) -> Result<()> {
        if !self.vectors_path.exists() {
            anyhow::bail!(
                "Vector file not found: {}\n\
                 Set KEYSIEVE_VECTORS or pass --vectors with a GloVe/word2vec text file.",
                self.vectors_path.display()
            );
        }
        Ok(())
    }
}

/// Read an optional float from the environment. Unset is `None`; set but
/// unparseable is an error.
fn parse_f64_var(name: &str) -> Result<Option<f64>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_f64_var_unset() {
        assert_eq!(parse_f64_var("KEYSIEVE_TEST_UNSET_VARIABLE").unwrap(), None);
    }

    #[test]
    fn test_require_vectors_missing_file() {
        let config = Config {
            vectors_path: std::env::temp_dir().join("keysieve-test-missing-vectors.txt"),
            stopword_language: "none".to_string(),
            rank_params: RankParams::default(),
        };
        assert!(config.require_vectors().is_err());
    }

    #[test]
    fn test_stopwords_from_config() {
        let config = Config {
            vectors_path: default_vectors_path(),
            stopword_language: "english".to_string(),
            rank_params: RankParams::default(),
        };
        assert!(config.stopwords().unwrap().contains("the"));
    }
}
