//! The `Ranker` trait, which defines the interface for ranking stages.

use crate::context::RankContext;
use crate::error::Error;
use crate::types::{Query, RankedMatch, RankerKind};

/// A trait for ranking a collection against a query.
///
/// The built-in [`DocumentRanker`](crate::rankers::DocumentRanker) and
/// [`SentenceRanker`](crate::rankers::SentenceRanker) implement it, and the
/// [`QaEngine`](crate::engine::QaEngine) can be configured with custom
/// implementations for either stage.
///
/// The `Send` and `Sync` bounds allow an engine to be shared across threads.
pub trait Ranker: Send + Sync {
  /// Returns the `RankerKind` of this ranker.
  fn kind(&self) -> RankerKind;

  /// Ranks the members of `context.collection` against `query`.
  ///
  /// # Arguments
  ///
  /// * `context` - The collection together with its IDF table.
  /// * `query` - The normalized query terms.
  /// * `limit` - The maximum number of matches to return.
  ///
  /// # Returns
  ///
  /// At most `limit` matches, best first. Implementations must order ties
  /// deterministically so that repeated calls give identical output.
  fn rank(
    &self,
    context: &RankContext<'_>,
    query: &Query,
    limit: usize,
  ) -> Result<Vec<RankedMatch>, Error>;
}
