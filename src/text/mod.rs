// Text handling: tokenization, normalization into a bag of words, and
// stopword filtering. Everything upstream of the similarity graph.

pub mod normalize;
pub mod stopwords;
pub mod tokenize;

pub use normalize::{fold_term, normalize_token, BagOfWords};
pub use stopwords::StopwordSet;
pub use tokenize::{WhitespaceTokenizer, WordTokenizer};
