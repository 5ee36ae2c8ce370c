//! The question answering pipeline that chains the two ranking stages.

use crate::context::RankContext;
use crate::corpus::Corpus;
use crate::error::Error;
use crate::idf::compute_idfs;
use crate::ranker::Ranker;
use crate::rankers::{DocumentRanker, SentenceRanker};
use crate::tokenizer::extend_sentence_candidates;
use crate::types::{Collection, Query, RankOptions, RankedMatch};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The result of answering one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Answer {
  /// The top documents, best first.
  pub files: Vec<RankedMatch>,
  /// The top sentences drawn from `files`, best first.
  pub sentences: Vec<RankedMatch>,
}

impl Answer {
  /// The best sentence, if any sentence matched.
  pub fn best(&self) -> Option<&str> {
    self.sentences.first().map(|m| m.id.as_str())
  }
}

/// The question answering engine.
///
/// `QaEngine` runs a query through two ranking stages:
///
/// 1.  **Tokenize** every document of the corpus.
/// 2.  **Document IDF**: compute an IDF table over the whole corpus.
/// 3.  **Rank documents** with the file ranker and keep
///     [`RankOptions::file_matches`] of them.
/// 4.  **Extract sentences** from the kept documents, in rank order. Identical
///     sentence text collapses to one candidate.
/// 5.  **Sentence IDF**: compute a fresh IDF table over those candidates only.
/// 6.  **Rank sentences** with the sentence ranker and keep
///     [`RankOptions::sentence_matches`] of them.
///
/// Create a `QaEngine` using the [`QaEngineBuilder`].
///
/// # Examples
///
/// ```rust
/// use quaero::prelude::*;
///
/// let corpus: Corpus = [
///     ("cats.txt", "The cat sat on the mat. Cats purr."),
///     ("dogs.txt", "A dog ran far. Dogs bark loudly."),
/// ]
/// .into_iter()
/// .collect();
///
/// let engine = QaEngine::builder()
///     .options(RankOptions::default().sentence_matches(1))
///     .build();
///
/// let answer = engine.answer_text(&corpus, "Where did the dog run?").unwrap();
/// assert_eq!(answer.files[0].id, "dogs.txt");
/// assert_eq!(answer.best(), Some("A dog ran far."));
/// ```
pub struct QaEngine {
  /// Ranks whole documents.
  file_ranker: Box<dyn Ranker>,
  /// Ranks sentence candidates drawn from the top documents.
  sentence_ranker: Box<dyn Ranker>,
  /// How many results each stage keeps.
  options: RankOptions,
}

impl Default for QaEngine {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl QaEngine {
  /// Creates a new `QaEngineBuilder` to construct an engine.
  pub fn builder() -> QaEngineBuilder {
    QaEngineBuilder::new()
  }

  /// The options this engine was built with.
  pub fn options(&self) -> RankOptions {
    self.options
  }

  /// Normalizes `text` into a [`Query`] and answers it.
  pub fn answer_text(&self, corpus: &Corpus, text: &str) -> Result<Answer, Error> {
    self.answer(corpus, &Query::from_text(text))
  }

  /// Answers `query` against `corpus`.
  ///
  /// An empty corpus or a query that matches nothing yields an [`Answer`]
  /// without sentences, not an error.
  pub fn answer(&self, corpus: &Corpus, query: &Query) -> Result<Answer, Error> {
    let files = corpus.tokenized();
    let file_idfs = compute_idfs(&files)?;
    debug!(
      documents = files.len(),
      vocabulary = file_idfs.len(),
      "computed document idfs"
    );

    let top_files = self.file_ranker.rank(
      &RankContext::new(&files, &file_idfs),
      query,
      self.options.file_matches,
    )?;
    debug!(kept = top_files.len(), "ranked documents");

    let sentences = self.sentence_candidates(corpus, &top_files);
    let sentence_idfs = compute_idfs(&sentences)?;
    debug!(
      candidates = sentences.len(),
      vocabulary = sentence_idfs.len(),
      "computed sentence idfs"
    );

    let top_sentences = self.sentence_ranker.rank(
      &RankContext::new(&sentences, &sentence_idfs),
      query,
      self.options.sentence_matches,
    )?;

    info!(
      query_terms = query.len(),
      files = top_files.len(),
      sentences = top_sentences.len(),
      "answered query"
    );

    Ok(Answer {
      files: top_files,
      sentences: top_sentences,
    })
  }

  /// Collects the sentence candidates of the ranked documents.
  fn sentence_candidates(&self, corpus: &Corpus, files: &[RankedMatch]) -> Collection {
    let mut sentences = Collection::new();
    for file in files {
      match corpus.get(&file.id) {
        Some(text) => extend_sentence_candidates(&mut sentences, text),
        None => debug!(file = %file.id, "ranked file is not in the corpus"),
      }
    }
    sentences
  }
}

/// A builder for creating `QaEngine` instances.
///
/// Unless overridden, the engine uses [`DocumentRanker`] for files,
/// [`SentenceRanker`] for sentences and the default [`RankOptions`].
pub struct QaEngineBuilder {
  file_ranker: Option<Box<dyn Ranker>>,
  sentence_ranker: Option<Box<dyn Ranker>>,
  options: RankOptions,
}

impl Default for QaEngineBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl QaEngineBuilder {
  /// Creates a new builder with the default rankers and options.
  pub fn new() -> Self {
    Self {
      file_ranker: None,
      sentence_ranker: None,
      options: RankOptions::default(),
    }
  }

  /// Replaces the ranker used for the document stage.
  pub fn file_ranker(mut self, ranker: Box<dyn Ranker>) -> Self {
    self.file_ranker = Some(ranker);
    self
  }

  /// Replaces the ranker used for the sentence stage.
  pub fn sentence_ranker(mut self, ranker: Box<dyn Ranker>) -> Self {
    self.sentence_ranker = Some(ranker);
    self
  }

  /// Sets how many results each stage keeps.
  pub fn options(mut self, options: RankOptions) -> Self {
    self.options = options;
    self
  }

  /// Builds the `QaEngine` with the configured components.
  pub fn build(self) -> QaEngine {
    QaEngine {
      file_ranker: self.file_ranker.unwrap_or_else(|| Box::new(DocumentRanker)),
      sentence_ranker: self
        .sentence_ranker
        .unwrap_or_else(|| Box::new(SentenceRanker)),
      options: self.options,
    }
  }
}
