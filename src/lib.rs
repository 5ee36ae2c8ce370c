//! Quaero - TF-IDF passage ranking for extractive question answering.
//!
//! Quaero answers a free-text question over a corpus of plain-text documents in
//! two ranking stages: documents are ranked by summed TF-IDF, then the
//! sentences of the best documents are ranked by summed IDF with a query term
//! density tie-break.
//!
//! The ranking core ([`idf`], [`rankers`]) works on pre-tokenized input and
//! never touches the filesystem. [`tokenizer`], [`corpus`] and [`engine`]
//! provide the collaborators needed to run the whole pipeline over a
//! directory of `.txt` files.

pub mod context;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod idf;
pub mod ranker;
pub mod rankers;
pub mod tokenizer;
pub mod types;

pub use error::Error;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::context::*;
  pub use crate::corpus::*;
  pub use crate::engine::*;
  pub use crate::error::*;
  pub use crate::idf::*;
  pub use crate::ranker::*;
  pub use crate::rankers::*;
  pub use crate::types::*;
}
