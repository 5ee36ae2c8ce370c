//! `quaero` CLI: answer a question from a directory of text documents.

use anyhow::{Context, Result};
use clap::Parser;
use quaero::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
  name = "quaero",
  about = "Answer questions from a corpus of text files using TF-IDF",
  version
)]
struct Cli {
  /// Directory containing the `.txt` documents to search
  corpus: PathBuf,

  /// Question to answer; prompted for on stdin when omitted
  #[arg(short, long)]
  query: Option<String>,

  /// Number of top documents to draw sentences from
  #[arg(long)]
  files: Option<usize>,

  /// Number of sentences to print
  #[arg(long)]
  sentences: Option<usize>,

  /// JSON file with default `file_matches` / `sentence_matches`
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Print score and density next to each sentence
  #[arg(long)]
  scores: bool,

  /// Print the full answer (files and sentences) as JSON
  #[arg(long, conflicts_with = "scores")]
  json: bool,
}

fn prompt_query() -> Result<String> {
  let mut stdout = io::stdout();
  write!(stdout, "Query: ")?;
  stdout.flush()?;

  let mut line = String::new();
  io::stdin()
    .lock()
    .read_line(&mut line)
    .context("failed to read query from stdin")?;
  Ok(line)
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  let mut options = match &cli.config {
    Some(path) => RankOptions::from_json_file(path)?,
    None => RankOptions::default(),
  };
  if let Some(n) = cli.files {
    options = options.file_matches(n);
  }
  if let Some(n) = cli.sentences {
    options = options.sentence_matches(n);
  }

  let corpus = load_files(&cli.corpus)
    .with_context(|| format!("failed to load corpus from {}", cli.corpus.display()))?;

  let text = match cli.query {
    Some(text) => text,
    None => prompt_query()?,
  };

  let engine = QaEngine::builder().options(options).build();
  let answer = engine.answer_text(&corpus, &text)?;

  if cli.json {
    println!("{}", serde_json::to_string_pretty(&answer)?);
    return Ok(());
  }

  for sentence in &answer.sentences {
    if cli.scores {
      println!(
        "{:.4}\t{:.4}\t{}",
        sentence.score, sentence.density, sentence.id
      );
    } else {
      println!("{}", sentence.id);
    }
  }

  Ok(())
}
