// Stopword set: terms excluded from ranking.
//
// Entries are folded with the same `fold_term` used for document tokens,
// so a stopword written "Über" still removes the token "uber". Matching is
// exact string equality after folding; there is no stemming.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};

use super::normalize::{fold_term, BagOfWords};

#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    terms: HashSet<String>,
}

impl StopwordSet {
    /// Build a set from a list of stopwords. The list may be empty.
    pub fn new<I, S>(stops: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(stops)?;
        Ok(set)
    }

    /// Built-in list for a language, from the `stop-words` crate.
    ///
    /// Accepts lowercase English language names ("english", "french", ...).
    /// "none" gives an empty set.
    pub fn for_language(name: &str) -> Result<Self> {
        let language = match name.trim().to_lowercase().as_str() {
            "none" | "" => return Ok(Self::default()),
            "english" | "en" => LANGUAGE::English,
            "french" | "fr" => LANGUAGE::French,
            "german" | "de" => LANGUAGE::German,
            "spanish" | "es" => LANGUAGE::Spanish,
            "italian" | "it" => LANGUAGE::Italian,
            "portuguese" | "pt" => LANGUAGE::Portuguese,
            "dutch" | "nl" => LANGUAGE::Dutch,
            "russian" | "ru" => LANGUAGE::Russian,
            other => anyhow::bail!(
                "Unsupported stopword language: {other:?}\n\
                 Supported: english, french, german, spanish, italian, portuguese, dutch, russian, none"
            ),
        };
        let stops: Vec<String> = get(language);
        Self::new(stops)
    }

    /// Fold and add more stopwords.
    pub fn extend<I, S>(&mut self, stops: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for stop in stops {
            let folded = fold_term(stop.as_ref())?;
            if !folded.is_empty() {
                self.terms.insert(folded);
            }
        }
        Ok(())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The folded stopwords, sorted.
    pub fn to_vec(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.terms.iter().cloned().collect();
        terms.sort();
        terms
    }

    /// Tokens of `bag` that are not stopwords, in the bag's iteration order.
    pub fn filter(&self, bag: &BagOfWords) -> Vec<String> {
        bag.iter()
            .filter(|term| !self.contains(term))
            .cloned()
            .collect()
    }
}
