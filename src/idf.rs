//! Inverse document frequency tables.
//!
//! An [`IdfTable`] is computed from scratch for one [`Collection`] and is only
//! meaningful relative to it: the engine builds one over the document corpus
//! and a second one over the sentence candidates drawn from the top documents.

use crate::error::Error;
use crate::types::{Collection, Token};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[cfg(feature = "parallel")]
use dashmap::DashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A mapping from token to inverse document frequency, `ln(D / df)`.
///
/// Every token appearing in at least one member of the source collection has
/// an entry; tokens that appear nowhere have none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdfTable {
  idfs: HashMap<Token, f64>,
  members: usize,
}

impl IdfTable {
  /// The IDF of `token`, or `None` if it never occurred in the collection.
  pub fn get(&self, token: &str) -> Option<f64> {
    self.idfs.get(token).copied()
  }

  /// The IDF of `token`, treating unseen tokens as contributing nothing.
  pub fn idf_or_zero(&self, token: &str) -> f64 {
    self.get(token).unwrap_or(0.0)
  }

  /// Returns `true` if `token` has an entry.
  pub fn contains(&self, token: &str) -> bool {
    self.idfs.contains_key(token)
  }

  /// Number of distinct tokens in the table.
  pub fn len(&self) -> usize {
    self.idfs.len()
  }

  /// Returns `true` if the table has no entries.
  pub fn is_empty(&self) -> bool {
    self.idfs.is_empty()
  }

  /// Number of members (documents or sentences) the table was computed from.
  pub fn members(&self) -> usize {
    self.members
  }

  /// Iterates over `(token, idf)` pairs in arbitrary order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
    self.idfs.iter().map(|(token, idf)| (token.as_str(), *idf))
  }
}

impl FromIterator<(Token, f64)> for IdfTable {
  /// Builds a table from explicit values. `members` is left at zero since the
  /// source collection is unknown.
  fn from_iter<I: IntoIterator<Item = (Token, f64)>>(iter: I) -> Self {
    Self {
      idfs: iter.into_iter().collect(),
      members: 0,
    }
  }
}

/// Rejects token sequences that contain an empty token.
pub(crate) fn validate_tokens(id: &str, tokens: &[Token]) -> Result<(), Error> {
  if tokens.iter().any(String::is_empty) {
    return Err(Error::InvalidToken { id: id.to_owned() });
  }
  Ok(())
}

/// Distinct tokens of one member, after validation.
fn distinct_tokens<'a>(id: &str, tokens: &'a [Token]) -> Result<HashSet<&'a str>, Error> {
  validate_tokens(id, tokens)?;
  Ok(tokens.iter().map(String::as_str).collect())
}

/// Computes the IDF of every token in `collection`.
///
/// With `D` members and `df(t)` the number of members containing `t` at least
/// once, `idf(t) = ln(D / df(t))`. An empty collection yields an empty table.
///
/// # Errors
///
/// [`Error::InvalidToken`] if any member contains an empty token.
pub fn compute_idfs(collection: &Collection) -> Result<IdfTable, Error> {
  let members = collection.len();
  if members == 0 {
    return Ok(IdfTable::default());
  }

  let doc_freq = document_frequencies(collection)?;
  let total = members as f64;
  let idfs = doc_freq
    .into_iter()
    .map(|(token, df)| (token.to_owned(), (total / df as f64).ln()))
    .collect();

  Ok(IdfTable { idfs, members })
}

#[cfg(not(feature = "parallel"))]
fn document_frequencies(collection: &Collection) -> Result<HashMap<&str, usize>, Error> {
  let mut doc_freq: HashMap<&str, usize> = HashMap::new();
  for (id, tokens) in collection {
    for token in distinct_tokens(id, tokens)? {
      *doc_freq.entry(token).or_insert(0) += 1;
    }
  }
  Ok(doc_freq)
}

#[cfg(feature = "parallel")]
fn document_frequencies(collection: &Collection) -> Result<HashMap<&str, usize>, Error> {
  let doc_freq: DashMap<&str, usize> = DashMap::new();
  collection.par_iter().try_for_each(|(id, tokens)| {
    for token in distinct_tokens(id, tokens)? {
      *doc_freq.entry(token).or_insert(0) += 1;
    }
    Ok::<(), Error>(())
  })?;
  Ok(doc_freq.into_iter().collect())
}
