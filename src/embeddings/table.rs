// In-memory word-vector table loaded from a GloVe / word2vec text file.
//
// Format: one entry per line, `word v1 v2 ... vd`, whitespace separated.
// A word2vec header line (`<count> <dim>`) at the top is recognised and
// skipped. Keys are folded on load so lookups line up with the normalized
// terms the extractor asks for.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use super::traits::Embedder;
use crate::text::fold_term;

/// Default location for the vector file.
/// Uses the platform data directory: ~/.local/share/keysieve/ on Linux.
pub fn default_vectors_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keysieve")
        .join("vectors.txt")
}

#[derive(Debug, Clone, Default)]
pub struct VectorTable {
    vectors: HashMap<String, Vec<f64>>,
    dimension: usize,
}

impl VectorTable {
    /// Load a vector file, showing a progress bar over bytes read.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open vector file {}", path.display()))?;
        let size = file
            .metadata()
            .with_context(|| format!("Failed to stat vector file {}", path.display()))?
            .len();

        let pb = ProgressBar::new(size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  Vectors [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .context("Invalid progress bar template")?
                .progress_chars("=> "),
        );

        let table = Self::from_reader(BufReader::new(pb.wrap_read(file)))
            .with_context(|| format!("Failed to read vector file {}", path.display()))?;
        pb.finish_and_clear();

        info!(
            words = table.len(),
            dim = table.dimension,
            path = %path.display(),
            "Loaded word vectors"
        );
        Ok(table)
    }

    /// Parse vectors from any buffered reader.
    ///
    /// The first vector fixes the dimension; later lines of another length are
    /// skipped. A value that doesn't parse as a float is a hard error.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::default();
        let mut skipped = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if line_no == 1 && is_word2vec_header(word, &rest) {
                debug!("Skipping word2vec header: {line}");
                continue;
            }

            let vector = rest
                .iter()
                .map(|v| v.parse::<f64>())
                .collect::<Result<Vec<f64>, _>>()
                .with_context(|| format!("Invalid vector component on line {line_no}"))?;
            if vector.is_empty() {
                skipped += 1;
                continue;
            }

            if table.dimension == 0 {
                table.dimension = vector.len();
            } else if vector.len() != table.dimension {
                debug!(
                    line = line_no,
                    expected = table.dimension,
                    got = vector.len(),
                    "Skipping vector with wrong dimension"
                );
                skipped += 1;
                continue;
            }

            let key = fold_term(word)?;
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            // First occurrence wins when several surface forms fold together
            table.vectors.entry(key).or_insert(vector);
        }

        if skipped > 0 {
            warn!(skipped, "Skipped malformed or mismatched vector lines");
        }

        Ok(table)
    }

    pub fn get(&self, term: &str) -> Option<&[f64]> {
        self.vectors.get(term).map(Vec::as_slice)
    }

    /// Vector dimension, or 0 for an empty table.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl Embedder for VectorTable {
    fn embed(&self, term: &str) -> Option<Vec<f64>> {
        self.get(term).map(<[f64]>::to_vec)
    }
}

/// A word2vec text file starts with `<vocab size> <dimension>`.
fn is_word2vec_header(first: &str, rest: &[&str]) -> bool {
    rest.len() == 1 && first.parse::<usize>().is_ok() && rest[0].parse::<usize>().is_ok()
}
