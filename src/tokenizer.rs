//! Text normalization and sentence splitting.
//!
//! The ranking core trusts its input to be normalized already. This module is
//! the normalizer the engine and CLI use: lowercase, Unicode word boundaries,
//! alphanumeric words only, English stop words removed.

use crate::types::{Collection, Token};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
  [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
  ]
  .into_iter()
  .collect()
});

/// Returns `true` if `word` is an English stop word.
pub fn is_stop_word(word: &str) -> bool {
  STOP_WORDS.contains(word)
}

/// Tokenize text into normalized words.
///
/// Words containing anything other than alphanumeric characters (contractions,
/// decimals, hyphenated compounds) are dropped, as are stop words.
pub fn tokenize(text: &str) -> Vec<Token> {
  text
    .to_lowercase()
    .unicode_words()
    .filter(|word| word.chars().all(char::is_alphanumeric))
    .filter(|word| !is_stop_word(word))
    .map(str::to_owned)
    .collect()
}

/// Build a term frequency table for a token sequence in a single pass.
pub fn term_frequencies<S: AsRef<str>>(tokens: &[S]) -> HashMap<&str, usize> {
  let mut freqs = HashMap::with_capacity(tokens.len());
  for token in tokens {
    *freqs.entry(token.as_ref()).or_insert(0) += 1;
  }
  freqs
}

/// Split a passage into sentences on Unicode sentence boundaries.
///
/// Sentences are trimmed and blank ones are dropped.
pub fn split_sentences(passage: &str) -> Vec<&str> {
  passage
    .unicode_sentences()
    .map(str::trim)
    .filter(|sentence| !sentence.is_empty())
    .collect()
}

/// Extract tokenized sentence candidates from raw document text.
///
/// The text is split into passages on line breaks and each passage into
/// sentences. Sentences without any token after normalization are skipped, so
/// every candidate has a non-zero length. Identical sentence text collapses to
/// a single entry.
pub fn sentence_candidates(text: &str) -> Collection {
  let mut sentences = Collection::new();
  extend_sentence_candidates(&mut sentences, text);
  sentences
}

/// Like [`sentence_candidates`], but adds to an existing collection.
pub fn extend_sentence_candidates(sentences: &mut Collection, text: &str) {
  for passage in text.split('\n') {
    for sentence in split_sentences(passage) {
      let tokens = tokenize(sentence);
      if !tokens.is_empty() {
        sentences.insert(sentence.to_owned(), tokens);
      }
    }
  }
}
