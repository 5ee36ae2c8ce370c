//! Context provided to rankers during a ranking pass.

use crate::idf::IdfTable;
use crate::types::Collection;

/// The inputs shared by every ranker in one ranking pass.
///
/// The `RankContext` is passed to each [`Ranker`](crate::ranker::Ranker). It
/// pairs a collection with the IDF table that was computed over the same
/// collection (or, for custom setups, over whichever collection the caller
/// chose).
#[derive(Debug, Clone, Copy)]
pub struct RankContext<'a> {
  /// The documents or sentences to rank.
  pub collection: &'a Collection,
  /// IDF values used for scoring.
  pub idfs: &'a IdfTable,
}

impl<'a> RankContext<'a> {
  /// Creates a new `RankContext`.
  pub fn new(collection: &'a Collection, idfs: &'a IdfTable) -> Self {
    Self { collection, idfs }
  }

  /// Number of members in the collection.
  pub fn len(&self) -> usize {
    self.collection.len()
  }

  /// Returns `true` if there is nothing to rank.
  pub fn is_empty(&self) -> bool {
    self.collection.is_empty()
  }
}
