// Co-occurrence TextRank fallback.
//
// When no word vectors are available the CLI still produces a ranking,
// using the `keyword_extraction` crate's TextRank over a sliding
// co-occurrence window instead of embedding similarity. Scores from the two
// methods are not comparable; this is a degraded mode, not an alternative.

use anyhow::Result;
use keyword_extraction::text_rank::{TextRank, TextRankParams};
use tracing::info;

use crate::text::fold_term;

/// Sliding co-occurrence window for the fallback graph.
const WINDOW_SIZE: usize = 2;
/// Matches the embedding ranker's damping factor.
const DAMPING_FACTOR: f32 = 0.85;
const TOLERANCE: f32 = 0.00005;
/// Single words only, like the embedding ranker.
const PHRASE_LENGTH: usize = 1;

static PUNCTUATION: &[&str] = &[
    ".", ",", ":", ";", "!", "?", "(", ")", "[", "]", "{", "}", "\"", "'", "`", "-", "/", "\\",
    "|", "@", "#", "$", "%", "^", "&", "*", "+", "=", "<", ">", "~", "_",
];

/// Rank single words of `text` by co-occurrence TextRank, highest first.
///
/// The document and the stopwords are folded the same way as in the
/// embedding ranker, so "Été" is dropped by a stopword "ete" and the
/// returned words are folded terms.
pub fn cooccurrence_keywords(
    text: &str,
    stopwords: &[String],
    top_n: usize,
) -> Result<Vec<(String, f32)>> {
    let folded_text = fold_term(text)?;
    let folded_stops = stopwords
        .iter()
        .map(|s| fold_term(s))
        .collect::<Result<Vec<_>>>()?;
    let punctuation: Vec<String> = PUNCTUATION.iter().map(|s| (*s).to_string()).collect();
    let params = TextRankParams::All(
        &folded_text,
        &folded_stops,
        Some(&punctuation),
        WINDOW_SIZE,
        DAMPING_FACTOR,
        TOLERANCE,
        Some(PHRASE_LENGTH),
    );
    let ranked = TextRank::new(params).get_ranked_word_scores(top_n);

    if let Some((word, score)) = ranked.first() {
        info!(
            keywords = ranked.len(),
            top_keyword = word.as_str(),
            top_score = *score,
            "Extracted co-occurrence keywords"
        );
    }

    Ok(ranked)
}
