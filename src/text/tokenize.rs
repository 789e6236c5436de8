// Word tokenizer trait, swap-ready.
//
// The extractor only needs the surface text of each raw token; sentence
// boundaries, offsets and POS tags are ignored. The default implementation
// uses the Hugging Face `tokenizers` whitespace pre-tokenizer, which splits
// on whitespace and separates runs of punctuation from word characters.

use anyhow::Result;
use tokenizers::pre_tokenizers::whitespace::Whitespace;
use tokenizers::{OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer};

/// Trait for splitting raw text into lexical tokens.
///
/// A tokenizer error aborts the extraction call it happened in; there is
/// no meaningful bag of words to fall back on.
pub trait WordTokenizer: Send + Sync {
    /// Split `text` into raw tokens (surface text only).
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

/// Default tokenizer backed by the `tokenizers` crate's `Whitespace`
/// pre-tokenizer (`\w+|[^\w\s]+`).
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut pretokenized = PreTokenizedString::from(text);
        Whitespace::default()
            .pre_tokenize(&mut pretokenized)
            .map_err(|e| anyhow::anyhow!("Pre-tokenization failed: {}", e))?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(surface, _offsets, _tokens)| surface.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer_splits_words_and_punctuation() {
        let tokens = WhitespaceTokenizer.tokenize("Hello, world!").unwrap();
        assert_eq!(tokens, vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn test_whitespace_tokenizer_empty() {
        let tokens = WhitespaceTokenizer.tokenize("").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_whitespace_tokenizer_only_spaces() {
        let tokens = WhitespaceTokenizer.tokenize("   \n\t ").unwrap();
        assert!(tokens.is_empty());
    }
}
