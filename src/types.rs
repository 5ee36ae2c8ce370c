//! Core data types for the Quaero ranking engine.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;

/// A normalized unit of text.
///
/// Tokens are produced by an external normalizer (see [`crate::tokenizer`])
/// and compared by exact equality. The ranking core never normalizes them
/// further.
pub type Token = String;

/// A collection of ranked members: documents keyed by name, or sentences
/// keyed by their literal text.
///
/// Token order within a member does not matter to the ranking core, only
/// multiplicity does.
pub type Collection = HashMap<String, Vec<Token>>;

/// A ranked document or sentence together with the values it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
  /// The document name or sentence text.
  pub id: String,
  /// The primary ranking score. TF-IDF for documents, summed matching-word
  /// IDF for sentences.
  pub score: f64,
  /// Query term density. Only the sentence ranker fills this in; it is `0.0`
  /// for documents.
  #[serde(default)]
  pub density: f64,
}

impl RankedMatch {
  /// Creates a new match with zero density.
  pub fn new(id: impl Into<String>, score: f64) -> Self {
    Self {
      id: id.into(),
      score,
      density: 0.0,
    }
  }

  /// Sets the query term density of the match.
  pub fn with_density(mut self, density: f64) -> Self {
    self.density = density;
    self
  }
}

/// A search query: a set of normalized tokens.
///
/// Duplicates collapse and order is irrelevant. The set is kept sorted so that
/// any per-term accumulation happens in the same order on every run, which
/// keeps floating point sums reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
  terms: BTreeSet<Token>,
}

impl Query {
  /// Creates a query from already-normalized tokens.
  pub fn new<I, S>(terms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<Token>,
  {
    Self {
      terms: terms.into_iter().map(Into::into).collect(),
    }
  }

  /// Normalizes free text with [`crate::tokenizer::tokenize`] and builds a
  /// query from the resulting tokens.
  pub fn from_text(text: &str) -> Self {
    Self::new(crate::tokenizer::tokenize(text))
  }

  /// Returns `true` if `token` is one of the query terms.
  pub fn contains(&self, token: &str) -> bool {
    self.terms.contains(token)
  }

  /// Iterates over the query terms in sorted order.
  pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
    self.terms.iter().map(String::as_str)
  }

  /// Number of distinct query terms.
  pub fn len(&self) -> usize {
    self.terms.len()
  }

  /// Returns `true` if the query has no terms.
  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }
}

impl<S: Into<Token>> FromIterator<S> for Query {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self::new(iter)
  }
}

/// Options controlling how many results each ranking stage keeps.
///
/// Options can be built in code with the chained setters or loaded from a
/// JSON file with [`RankOptions::from_json_file`]. Missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankOptions {
  /// Number of top documents whose sentences become answer candidates.
  #[serde(default = "default_matches")]
  pub file_matches: usize,
  /// Number of sentences returned as the answer.
  #[serde(default = "default_matches")]
  pub sentence_matches: usize,
}

/// Returns the default number of matches kept by either stage.
fn default_matches() -> usize {
  1
}

impl Default for RankOptions {
  fn default() -> Self {
    Self {
      file_matches: default_matches(),
      sentence_matches: default_matches(),
    }
  }
}

impl RankOptions {
  /// Sets the number of documents kept by the document stage.
  pub fn file_matches(mut self, n: usize) -> Self {
    self.file_matches = n;
    self
  }

  /// Sets the number of sentences kept by the sentence stage.
  pub fn sentence_matches(mut self, n: usize) -> Self {
    self.sentence_matches = n;
    self
  }

  /// Parses options from a JSON string.
  ///
  /// Negative counts are rejected with [`Error::InvalidArgument`] rather than
  /// surfacing as a generic parse failure.
  pub fn from_json_str(json: &str) -> Result<Self, Error> {
    let raw: RawRankOptions = serde_json::from_str(json)?;
    Ok(Self {
      file_matches: non_negative("file_matches", raw.file_matches)?,
      sentence_matches: non_negative("sentence_matches", raw.sentence_matches)?,
    })
  }

  /// Reads and parses options from a JSON file.
  pub fn from_json_file(path: &Path) -> Result<Self, Error> {
    let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Self::from_json_str(&json)
  }
}

/// Signed mirror of [`RankOptions`] so negative counts can be reported by name.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRankOptions {
  #[serde(default = "default_raw_matches")]
  file_matches: i64,
  #[serde(default = "default_raw_matches")]
  sentence_matches: i64,
}

fn default_raw_matches() -> i64 {
  default_matches() as i64
}

fn non_negative(field: &str, value: i64) -> Result<usize, Error> {
  usize::try_from(value)
    .map_err(|_| Error::InvalidArgument(format!("{field} must be non-negative, got {value}")))
}

/// The kinds of rankers the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankerKind {
  /// Ranks whole documents by summed TF-IDF.
  Document,
  /// Ranks sentences by summed matching-word IDF and query term density.
  Sentence,
  /// A user-defined ranker.
  Custom,
}
