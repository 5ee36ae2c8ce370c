//! In-memory document corpus and the directory loader that fills it.

use crate::error::Error;
use crate::tokenizer::tokenize;
use crate::types::Collection;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Raw document texts keyed by document name.
///
/// Documents are kept in name order so that anything derived from a corpus
/// (sentence candidates, logs, CLI output) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
  documents: BTreeMap<String, String>,
}

impl Corpus {
  /// Create a new empty corpus.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace a document, returning the previous text if any.
  pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<String> {
    self.documents.insert(name.into(), text.into())
  }

  /// Remove a document.
  pub fn remove(&mut self, name: &str) -> Option<String> {
    self.documents.remove(name)
  }

  /// The raw text of a document.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.documents.get(name).map(String::as_str)
  }

  /// Number of documents.
  pub fn len(&self) -> usize {
    self.documents.len()
  }

  /// Returns `true` if the corpus holds no documents.
  pub fn is_empty(&self) -> bool {
    self.documents.is_empty()
  }

  /// Iterate over `(name, text)` pairs in name order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
    self
      .documents
      .iter()
      .map(|(name, text)| (name.as_str(), text.as_str()))
  }

  /// Tokenize every document with [`tokenize`].
  pub fn tokenized(&self) -> Collection {
    self
      .documents
      .iter()
      .map(|(name, text)| (name.clone(), tokenize(text)))
      .collect()
  }
}

impl<N: Into<String>, T: Into<String>> FromIterator<(N, T)> for Corpus {
  fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
    Self {
      documents: iter
        .into_iter()
        .map(|(name, text)| (name.into(), text.into()))
        .collect(),
    }
  }
}

/// Load every `.txt` file directly inside `directory` into a [`Corpus`].
///
/// Documents are keyed by file name. Subdirectories and files with any other
/// extension are skipped.
///
/// # Errors
///
/// [`Error::Io`] if the directory cannot be listed or a text file cannot be
/// read as UTF-8.
pub fn load_files(directory: &Path) -> Result<Corpus, Error> {
  let entries = std::fs::read_dir(directory).map_err(|e| Error::io(directory, e))?;
  let mut corpus = Corpus::new();

  for entry in entries {
    let entry = entry.map_err(|e| Error::io(directory, e))?;
    let path = entry.path();
    let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

    let is_text = path.extension().is_some_and(|ext| ext == "txt");
    if !file_type.is_file() || !is_text {
      debug!(path = %path.display(), "skipping non-text entry");
      continue;
    }

    let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let name = entry.file_name().to_string_lossy().into_owned();
    debug!(%name, bytes = text.len(), "loaded document");
    corpus.insert(name, text);
  }

  debug!(
    directory = %directory.display(),
    documents = corpus.len(),
    "corpus loaded"
  );
  Ok(corpus)
}
