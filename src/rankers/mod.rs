//! The built-in `Ranker` implementations.
//!
//! # Available Rankers
//!
//! - [`DocumentRanker`](crate::rankers::DocumentRanker): summed TF-IDF over whole documents.
//! - [`SentenceRanker`](crate::rankers::SentenceRanker): summed matching-word IDF with a
//!   query term density tie-break.
//!
//! Both rankers order results by a total, deterministic key: score descending,
//! then density descending, then identifier ascending. The order never
//! depends on hash map iteration order.
//!
//! # Example
//!
//! ```rust
//! use quaero::prelude::*;
//! use std::collections::HashMap;
//!
//! let files: Collection = HashMap::from([
//!     ("a.txt".to_string(), vec!["cat".to_string(), "sat".to_string()]),
//!     ("b.txt".to_string(), vec!["dog".to_string(), "ran".to_string()]),
//! ]);
//! let idfs = compute_idfs(&files).unwrap();
//! let query = Query::new(["cat"]);
//!
//! assert_eq!(top_files(&query, &files, &idfs, 1).unwrap(), vec!["a.txt"]);
//! ```

/// Ranks documents by summed TF-IDF.
pub mod document;
/// Ranks sentences by matching-word IDF and query term density.
pub mod sentence;

pub use document::{top_files, DocumentRanker};
pub use sentence::{top_sentences, SentenceRanker};

use crate::error::Error;
use crate::types::{Collection, RankedMatch, Token};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The ranking order shared by all built-in rankers.
///
/// Score descending, then density descending, then identifier ascending.
/// Identifiers are unique within a collection, so this is a total order.
pub fn rank_order(a: &RankedMatch, b: &RankedMatch) -> Ordering {
  b.score
    .total_cmp(&a.score)
    .then_with(|| b.density.total_cmp(&a.density))
    .then_with(|| a.id.cmp(&b.id))
}

/// Scores every member of `collection`, drops the ones `score` rejects, and
/// returns the best `limit` in [`rank_order`].
pub(crate) fn rank_members<F>(
  collection: &Collection,
  limit: usize,
  score: F,
) -> Result<Vec<RankedMatch>, Error>
where
  F: Fn(&str, &[Token]) -> Result<Option<RankedMatch>, Error> + Send + Sync,
{
  if limit == 0 || collection.is_empty() {
    return Ok(Vec::new());
  }

  #[cfg(feature = "parallel")]
  let scored: Vec<Option<RankedMatch>> = collection
    .par_iter()
    .map(|(id, tokens)| score(id.as_str(), tokens.as_slice()))
    .collect::<Result<_, Error>>()?;

  #[cfg(not(feature = "parallel"))]
  let scored: Vec<Option<RankedMatch>> = collection
    .iter()
    .map(|(id, tokens)| score(id.as_str(), tokens.as_slice()))
    .collect::<Result<_, Error>>()?;

  let mut matches: Vec<RankedMatch> = scored.into_iter().flatten().collect();
  matches.sort_unstable_by(rank_order);
  matches.truncate(limit);
  Ok(matches)
}
