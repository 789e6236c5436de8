// Term normalization and the bag-of-words type.
//
// Every term that reaches the ranker, every stopword, and every key in a
// vector table passes through `fold_term`, so "Café", "CAFE" and "cafe"
// all meet as the same string.

use std::collections::btree_set;
use std::collections::BTreeSet;

use anyhow::Result;
use tokenizers::normalizers::StripAccents;
use tokenizers::{NormalizedString, Normalizer};

/// Fold a single term: lowercase, decompose (NFD), strip combining marks,
/// recompose (NFC).
///
/// Pure and stateless. Does not split; see `normalize_token` for that.
pub fn fold_term(term: &str) -> Result<String> {
    let mut normalized = NormalizedString::from(term);
    normalized.lowercase().nfd();
    StripAccents
        .normalize(&mut normalized)
        .map_err(|e| anyhow::anyhow!("Failed to strip accents from {term:?}: {}", e))?;
    normalized.nfc();
    Ok(normalized.get().to_string())
}

/// Fold a raw lexical token and split it into its letter/digit fragments.
///
/// Any Unicode numeric character counts as a digit, so superscripts,
/// fractions and roman numerals stay inside the word ("x²" is one term).
///
/// Marks are stripped before splitting, so a decomposed "nai\u{308}ve"
/// stays one word instead of breaking at the diaeresis. Empty fragments are
/// dropped; a symbol-only token yields an empty vec.
pub fn normalize_token(raw: &str) -> Result<Vec<String>> {
    let folded = fold_term(raw)?;
    Ok(folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect())
}

/// An unordered set of unique, normalized terms from one document.
///
/// Backed by a sorted set so iteration order (and therefore graph node
/// indexing) is the same on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BagOfWords {
    terms: BTreeSet<String>,
}

impl BagOfWords {
    /// Normalize a sequence of raw tokens into a bag.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut terms = BTreeSet::new();
        for token in tokens {
            terms.extend(normalize_token(token.as_ref())?);
        }
        Ok(Self { terms })
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.terms.iter()
    }
}

/// Wrap terms that are already normalized. No folding or splitting happens
/// here; use `from_tokens` for raw input.
impl FromIterator<String> for BagOfWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BagOfWords {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
