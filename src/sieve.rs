// Sieve, the keyword extractor.
//
// Pipeline per call:
//   raw text -> tokenizer -> normalized bag of words -> stopword filter
//     -> similarity graph (word vectors) -> PageRank -> sorted Keywords
//
// A Sieve is immutable once built. Its tokenizer and embedder are
// `Send + Sync`, so one instance can be shared behind an `Arc` by
// concurrent callers; each call allocates its own graph and rank buffers.

use anyhow::{Context, Result};
use tracing::debug;

use crate::embeddings::Embedder;
use crate::graph::{pagerank, RankParams, SimilarityGraph};
use crate::keywords::Keywords;
use crate::text::{BagOfWords, StopwordSet, WhitespaceTokenizer, WordTokenizer};

pub struct Sieve {
    stopwords: StopwordSet,
    embedder: Box<dyn Embedder>,
    tokenizer: Box<dyn WordTokenizer>,
    params: RankParams,
}

impl Sieve {
    /// Build an extractor from a vector provider and a stopword list (which
    /// may be empty). Uses the whitespace tokenizer and default PageRank
    /// parameters.
    pub fn new<I, S>(embedder: Box<dyn Embedder>, stopwords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_stopword_set(
            embedder,
            StopwordSet::new(stopwords)?,
        ))
    }

    /// Build from an already-folded stopword set.
    pub fn with_stopword_set(embedder: Box<dyn Embedder>, stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            embedder,
            tokenizer: Box::new(WhitespaceTokenizer),
            params: RankParams::default(),
        }
    }

    /// Replace the tokenizer.
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn WordTokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Replace the PageRank parameters. Fails if they can't converge.
    pub fn with_params(mut self, params: RankParams) -> Result<Self> {
        params.validate()?;
        self.params = params;
        Ok(self)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn params(&self) -> &RankParams {
        &self.params
    }

    /// Tokenize and normalize `text` into a bag of words.
    pub fn bag_of_words(&self, text: &str) -> Result<BagOfWords> {
        let tokens = self
            .tokenizer
            .tokenize(text)
            .context("Tokenizer failed; no keywords extracted")?;
        BagOfWords::from_tokens(&tokens)
    }

    /// Rank the terms of a pre-built bag of words.
    ///
    /// Stopwords and terms without a word vector are left out of the result.
    pub fn rank_bag(&self, bag: &BagOfWords) -> Keywords {
        let filtered = self.stopwords.filter(bag);
        let graph = SimilarityGraph::build(&filtered, self.embedder.as_ref());
        let outcome = pagerank(&graph, &self.params);

        debug!(
            bag = bag.len(),
            filtered = filtered.len(),
            ranked = graph.node_count(),
            iterations = outcome.iterations,
            "Ranked bag of words"
        );

        Keywords::assemble(graph.into_terms(), outcome.scores)
    }

    /// Extract keywords from raw text.
    pub fn sift(&self, text: &str) -> Result<Keywords> {
        let bag = self.bag_of_words(text)?;
        Ok(self.rank_bag(&bag))
    }
}
