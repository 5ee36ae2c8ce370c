use quaero::prelude::*;
use std::fs;
use std::path::Path;

fn write_corpus(root: &Path) {
  fs::write(
    root.join("python.txt"),
    "Python is a high-level programming language.\n\
     Python was created by Guido van Rossum and first released in 1991.",
  )
  .expect("write python.txt");
  fs::write(
    root.join("coffee.txt"),
    "Coffee is a brewed drink prepared from roasted coffee beans.\n\
     Coffee plants are cultivated in over 70 countries.",
  )
  .expect("write coffee.txt");
  fs::write(root.join("notes.md"), "Python python python.").expect("write notes.md");
  fs::create_dir(root.join("nested.txt")).expect("create nested dir");
}

#[test]
fn test_load_files_reads_only_text_files() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_corpus(tmp.path());

  let corpus = load_files(tmp.path()).unwrap();

  assert_eq!(corpus.len(), 2);
  assert!(corpus.get("python.txt").is_some());
  assert!(corpus.get("coffee.txt").is_some());
  assert!(corpus.get("notes.md").is_none());
  assert!(corpus.get("nested.txt").is_none());
}

#[test]
fn test_load_empty_directory() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let corpus = load_files(tmp.path()).unwrap();
  assert!(corpus.is_empty());

  let answer = QaEngine::default().answer_text(&corpus, "anything").unwrap();
  assert!(answer.files.is_empty());
  assert!(answer.sentences.is_empty());
}

#[test]
fn test_answer_from_directory() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_corpus(tmp.path());
  let corpus = load_files(tmp.path()).unwrap();

  let engine = QaEngine::default();
  let answer = engine
    .answer_text(&corpus, "When was Python first released?")
    .unwrap();

  assert_eq!(answer.files[0].id, "python.txt");
  assert_eq!(
    answer.best(),
    Some("Python was created by Guido van Rossum and first released in 1991.")
  );

  let answer = engine
    .answer_text(&corpus, "Where are coffee plants cultivated?")
    .unwrap();
  assert_eq!(answer.files[0].id, "coffee.txt");
  assert_eq!(
    answer.best(),
    Some("Coffee plants are cultivated in over 70 countries.")
  );
}

#[test]
fn test_options_from_config_file() {
  let tmp = tempfile::tempdir().expect("tempdir");
  write_corpus(tmp.path());
  let config = tmp.path().join("quaero.json");
  fs::write(&config, r#"{"file_matches": 2, "sentence_matches": 4}"#).expect("write config");

  let options = RankOptions::from_json_file(&config).unwrap();
  assert_eq!(options, RankOptions::default().file_matches(2).sentence_matches(4));

  let corpus = load_files(tmp.path()).unwrap();
  let answer = QaEngine::builder()
    .options(options)
    .build()
    .answer(&corpus, &Query::new(["python", "coffee"]))
    .unwrap();

  assert_eq!(answer.files.len(), 2);
  assert_eq!(answer.sentences.len(), 4);
}

#[test]
fn test_missing_config_file() {
  let tmp = tempfile::tempdir().expect("tempdir");
  let err = RankOptions::from_json_file(&tmp.path().join("missing.json")).unwrap_err();
  assert!(matches!(err, Error::Io { .. }));
}
