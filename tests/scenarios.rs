//! End-to-end ranking scenarios over hand-built token collections.

use quaero::prelude::*;

fn collection(members: &[(&str, &[&str])]) -> Collection {
  members
    .iter()
    .map(|(id, tokens)| (id.to_string(), tokens.iter().map(|t| t.to_string()).collect()))
    .collect()
}

#[test]
fn test_single_term_picks_matching_file() {
  let files = collection(&[("a.txt", &["cat", "sat"]), ("b.txt", &["dog", "ran"])]);
  let idfs = compute_idfs(&files).unwrap();

  let top = top_files(&Query::new(["cat"]), &files, &idfs, 1).unwrap();
  assert_eq!(top, vec!["a.txt"]);
}

#[test]
fn test_equal_idf_sentences_prefer_denser() {
  let sentences = collection(&[
    ("The cat sat.", &["cat", "sat"]),
    ("A dog ran far.", &["dog", "ran", "far"]),
  ]);
  let idfs = compute_idfs(&sentences).unwrap();
  assert_eq!(idfs.get("cat"), idfs.get("dog"));

  let query = Query::new(["cat", "dog"]);
  let top = top_sentences(&query, &sentences, &idfs, 1).unwrap();
  assert_eq!(top, vec!["The cat sat."]);

  let both = top_sentences(&query, &sentences, &idfs, 2).unwrap();
  assert_eq!(both, vec!["The cat sat.", "A dog ran far."]);
}

#[test]
fn test_unseen_query_term_is_ignored() {
  let files = collection(&[
    ("a.txt", &["cat", "sat", "mat"]),
    ("b.txt", &["dog", "ran"]),
    ("c.txt", &["dog", "dog", "bone"]),
  ]);
  let idfs = compute_idfs(&files).unwrap();

  let plain = top_files(&Query::new(["dog"]), &files, &idfs, 3).unwrap();
  let with_unseen = top_files(&Query::new(["dog", "zebra"]), &files, &idfs, 3).unwrap();
  assert_eq!(plain, with_unseen);
  assert_eq!(plain, vec!["c.txt", "b.txt", "a.txt"]);

  let ranked = DocumentRanker
    .rank(&RankContext::new(&files, &idfs), &Query::new(["zebra"]), 3)
    .unwrap();
  assert!(ranked.iter().all(|m| m.score == 0.0));
}

#[test]
fn test_n_beyond_candidate_count() {
  let files = collection(&[("a.txt", &["cat"]), ("b.txt", &["dog"])]);
  let idfs = compute_idfs(&files).unwrap();
  assert_eq!(top_files(&Query::new(["cat"]), &files, &idfs, 50).unwrap().len(), 2);

  let sentences = collection(&[
    ("Cat one.", &["cat", "one"]),
    ("Cat two.", &["cat", "two"]),
    ("Dog.", &["dog"]),
  ]);
  let idfs = compute_idfs(&sentences).unwrap();
  let top = top_sentences(&Query::new(["cat"]), &sentences, &idfs, 50).unwrap();
  assert_eq!(top, vec!["Cat one.", "Cat two."]);
}
