use crate::context::RankContext;
use crate::error::Error;
use crate::idf::{validate_tokens, IdfTable};
use crate::ranker::Ranker;
use crate::rankers::rank_members;
use crate::tokenizer::term_frequencies;
use crate::types::{Collection, Query, RankedMatch, RankerKind, Token};

/// Ranks documents by summed TF-IDF.
///
/// For a document `d`, `score(d) = Σ tf(t, d) × idf(t)` over the query terms
/// `t`, where `tf` is the raw occurrence count and terms missing from the IDF
/// table contribute nothing. Documents that match no query term are still
/// ranked, with a score of zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRanker;

impl DocumentRanker {
  /// Creates a new `DocumentRanker`.
  pub fn new() -> Self {
    Self
  }

  /// Computes the TF-IDF score of a single document.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidToken`] if `tokens` contains an empty token.
  pub fn score(
    &self,
    id: &str,
    tokens: &[Token],
    query: &Query,
    idfs: &IdfTable,
  ) -> Result<f64, Error> {
    validate_tokens(id, tokens)?;
    if query.is_empty() {
      return Ok(0.0);
    }

    // Folding from +0.0 keeps non-matching documents from scoring -0.0, which
    // total_cmp would order below other zero scores.
    let freqs = term_frequencies(tokens);
    Ok(
      query
        .terms()
        .filter_map(|term| freqs.get(term).map(|&tf| tf as f64 * idfs.idf_or_zero(term)))
        .fold(0.0, |score, weight| score + weight),
    )
  }
}

impl Ranker for DocumentRanker {
  fn kind(&self) -> RankerKind {
    RankerKind::Document
  }

  fn rank(
    &self,
    context: &RankContext<'_>,
    query: &Query,
    limit: usize,
  ) -> Result<Vec<RankedMatch>, Error> {
    rank_members(context.collection, limit, |id, tokens| {
      let score = self.score(id, tokens, query, context.idfs)?;
      Ok(Some(RankedMatch::new(id, score)))
    })
  }
}

/// Returns the names of the `n` documents that best match `query` by TF-IDF.
///
/// Ties are broken by document name ascending. If `files` holds fewer than
/// `n` documents, all of them are returned.
pub fn top_files(
  query: &Query,
  files: &Collection,
  idfs: &IdfTable,
  n: usize,
) -> Result<Vec<String>, Error> {
  let context = RankContext::new(files, idfs);
  let matches = DocumentRanker.rank(&context, query, n)?;
  Ok(matches.into_iter().map(|m| m.id).collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::idf::compute_idfs;

  fn files(members: &[(&str, &[&str])]) -> Collection {
    members
      .iter()
      .map(|(id, tokens)| (id.to_string(), tokens.iter().map(|t| t.to_string()).collect()))
      .collect()
  }

  #[test]
  fn test_top_files_single_match() {
    let files = files(&[("a.txt", &["cat", "sat"]), ("b.txt", &["dog", "ran"])]);
    let idfs = compute_idfs(&files).unwrap();
    let query = Query::new(["cat"]);

    assert_eq!(top_files(&query, &files, &idfs, 1).unwrap(), vec!["a.txt"]);
  }

  #[test]
  fn test_score_scales_with_term_frequency() {
    let files = files(&[
      ("once.txt", &["cat", "sat"]),
      ("twice.txt", &["cat", "cat"]),
      ("none.txt", &["dog"]),
    ]);
    let idfs = compute_idfs(&files).unwrap();
    let query = Query::new(["cat"]);

    let ranked = DocumentRanker
      .rank(&RankContext::new(&files, &idfs), &query, 10)
      .unwrap();
    let cat_idf = idfs.get("cat").unwrap();

    assert_eq!(ranked[0].id, "twice.txt");
    assert_eq!(ranked[0].score, 2.0 * cat_idf);
    assert_eq!(ranked[1].id, "once.txt");
    assert_eq!(ranked[1].score, cat_idf);
    assert_eq!(ranked[2].id, "none.txt");
    assert_eq!(ranked[2].score, 0.0);
  }

  #[test]
  fn test_unknown_query_term_contributes_nothing() {
    let files = files(&[("a.txt", &["cat", "sat"]), ("b.txt", &["dog", "ran"])]);
    let idfs = compute_idfs(&files).unwrap();

    let with_unknown = Query::new(["dog", "unicorn"]);
    let ranked = DocumentRanker
      .rank(&RankContext::new(&files, &idfs), &with_unknown, 2)
      .unwrap();

    assert_eq!(ranked[0].id, "b.txt");
    assert_eq!(ranked[0].score, idfs.get("dog").unwrap());
    assert_eq!(ranked[1].score, 0.0);
  }

  #[test]
  fn test_ties_break_by_name() {
    let files = files(&[("c.txt", &["cat"]), ("a.txt", &["cat"]), ("b.txt", &["dog"])]);
    let idfs = compute_idfs(&files).unwrap();
    let query = Query::new(["cat"]);

    assert_eq!(
      top_files(&query, &files, &idfs, 3).unwrap(),
      vec!["a.txt", "c.txt", "b.txt"]
    );
  }

  #[test]
  fn test_n_larger_than_corpus() {
    let files = files(&[("a.txt", &["cat"]), ("b.txt", &["dog"])]);
    let idfs = compute_idfs(&files).unwrap();
    let query = Query::new(["cat"]);

    assert_eq!(top_files(&query, &files, &idfs, 10).unwrap().len(), 2);
    assert!(top_files(&query, &files, &idfs, 0).unwrap().is_empty());
  }

  #[test]
  fn test_empty_inputs() {
    let empty = Collection::new();
    let idfs = compute_idfs(&empty).unwrap();
    assert!(top_files(&Query::new(["cat"]), &empty, &idfs, 3).unwrap().is_empty());

    let files = files(&[("b.txt", &["dog"]), ("a.txt", &["cat"])]);
    let idfs = compute_idfs(&files).unwrap();
    let ranked = top_files(&Query::default(), &files, &idfs, 5).unwrap();
    assert_eq!(ranked, vec!["a.txt", "b.txt"]);
  }

  #[test]
  fn test_empty_token_is_rejected() {
    let files = files(&[("a.txt", &["cat", ""])]);
    let idfs = IdfTable::default();
    let err = top_files(&Query::new(["cat"]), &files, &idfs, 1).unwrap_err();
    assert!(matches!(err, Error::InvalidToken { .. }));
  }
}
