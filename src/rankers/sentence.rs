use crate::context::RankContext;
use crate::error::Error;
use crate::idf::{validate_tokens, IdfTable};
use crate::ranker::Ranker;
use crate::rankers::rank_members;
use crate::tokenizer::term_frequencies;
use crate::types::{Collection, Query, RankedMatch, RankerKind, Token};

/// How a single sentence relates to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
  /// Sum of the IDF of every distinct query term present in the sentence.
  pub score: f64,
  /// Number of sentence tokens that are query terms, counting repeats.
  pub query_tokens: usize,
  /// `query_tokens` divided by the sentence length; `0.0` for an empty
  /// sentence.
  pub density: f64,
}

impl SentenceScore {
  /// Returns `true` if at least one query term occurs in the sentence.
  pub fn is_match(&self) -> bool {
    self.query_tokens > 0
  }
}

/// Ranks sentences by matching-word IDF, breaking ties by query term density.
///
/// Unlike [`DocumentRanker`](crate::rankers::DocumentRanker), a query term
/// counts once per sentence no matter how often it repeats. Sentences that
/// contain no query term are left out of the ranking entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceRanker;

impl SentenceRanker {
  /// Creates a new `SentenceRanker`.
  pub fn new() -> Self {
    Self
  }

  /// Computes the matching-word IDF and query term density of one sentence.
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
  ) -> Result<SentenceScore, Error> {
    validate_tokens(id, tokens)?;

    let freqs = term_frequencies(tokens);
    let mut score = 0.0;
    let mut query_tokens = 0;
    for term in query.terms() {
      if let Some(&count) = freqs.get(term) {
        score += idfs.idf_or_zero(term);
        query_tokens += count;
      }
    }

    let density = if tokens.is_empty() {
      0.0
    } else {
      query_tokens as f64 / tokens.len() as f64
    };

    Ok(SentenceScore {
      score,
      query_tokens,
      density,
    })
  }
}

impl Ranker for SentenceRanker {
  fn kind(&self) -> RankerKind {
    RankerKind::Sentence
  }

  fn rank(
    &self,
    context: &RankContext<'_>,
    query: &Query,
    limit: usize,
  ) -> Result<Vec<RankedMatch>, Error> {
    if query.is_empty() {
      return Ok(Vec::new());
    }

    rank_members(context.collection, limit, |id, tokens| {
      let scored = self.score(id, tokens, query, context.idfs)?;
      Ok(
        scored
          .is_match()
          .then(|| RankedMatch::new(id, scored.score).with_density(scored.density)),
      )
    })
  }
}

/// Returns the `n` sentences that best match `query`.
///
/// Sentences are ordered by summed IDF of the query terms they contain, then
/// by query term density, then by sentence text. Sentences containing no query
/// term are never returned.
pub fn top_sentences(
  query: &Query,
  sentences: &Collection,
  idfs: &IdfTable,
  n: usize,
) -> Result<Vec<String>, Error> {
  let context = RankContext::new(sentences, idfs);
  let matches = SentenceRanker.rank(&context, query, n)?;
  Ok(matches.into_iter().map(|m| m.id).collect())
}
