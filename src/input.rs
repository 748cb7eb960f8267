//! Word list loading: reads lines, folds case, rejects anything outside
//! `a..=z`, and builds the trie.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::DawgError;
use crate::trie::Trie;

/// Words longer than this are rejected rather than risking unbounded
/// recursion/stack depth downstream.
pub const MAX_WORD_LEN: usize = 256;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadReport {
  pub loaded: usize,
  pub skipped: usize,
}

/// Builds a trie from every accepted line of `path`. Empty lines (after
/// trimming trailing whitespace) are dropped without counting as skipped;
/// everything else is either accepted (case-folded and inserted) or
/// rejected (counted in `skipped`).
pub fn load_trie(path: &Path) -> Result<(Trie, LoadReport), DawgError> {
  let file = File::open(path).map_err(|source| DawgError::InputOpen {
    path: path.to_path_buf(),
    source,
  })?;
  let reader = BufReader::new(file);

  let mut trie = Trie::new();
  let mut report = LoadReport::default();

  for line in reader.lines() {
    let line = line.map_err(|source| DawgError::InputOpen {
      path: path.to_path_buf(),
      source,
    })?;
    let trimmed = line.trim_end();
    if trimmed.is_empty() {
      continue;
    }

    match accept(trimmed) {
      Some(word) => {
        trie.insert(&word);
        report.loaded += 1;
      }
      None => {
        tracing::debug!(line = trimmed, "rejected malformed input line");
        report.skipped += 1;
      }
    }
  }

  Ok((trie, report))
}

/// Case-folds and validates a single trimmed, non-empty line. Returns
/// `None` for anything that isn't pure ASCII alphabetic once lowercased, or
/// that exceeds [`MAX_WORD_LEN`].
fn accept(line: &str) -> Option<String> {
  if line.chars().count() > MAX_WORD_LEN {
    return None;
  }

  let mut word = String::with_capacity(line.len());
  for c in line.chars() {
    if !c.is_ascii_alphabetic() {
      return None;
    }
    word.push(c.to_ascii_lowercase());
  }
  Some(word)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn write_temp(contents: &str) -> tempfile_like::TempPath {
    tempfile_like::write(contents)
  }

  // A tiny, dependency-free stand-in for a temp-file helper: pulling in a
  // whole dev-dependency crate for one test file isn't worth it, so this
  // just drops a file next to the build output and removes it on drop.
  mod tempfile_like {
    use std::fs::File;
    use std::io::Write as _;
    use std::path::{Path, PathBuf};

    pub struct TempPath(PathBuf);

    impl TempPath {
      pub fn path(&self) -> &Path {
        &self.0
      }
    }

    impl Drop for TempPath {
      fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
      }
    }

    pub fn write(contents: &str) -> TempPath {
      let mut path = std::env::temp_dir();
      path.push(format!("dawg_builder_input_test_{}.txt", std::process::id()));
      let mut file = File::create(&path).expect("create temp file");
      file.write_all(contents.as_bytes()).expect("write temp file");
      TempPath(path)
    }
  }

  #[test]
  fn accepts_lowercase_and_rejects_non_alpha() {
    assert_eq!(accept("cat"), Some("cat".to_owned()));
    assert_eq!(accept("Cat"), Some("cat".to_owned()));
    assert_eq!(accept("CAT"), Some("cat".to_owned()));
    assert_eq!(accept("c-at"), None);
    assert_eq!(accept("123"), None);
  }

  #[test]
  fn rejects_words_longer_than_max_len() {
    let long = "a".repeat(MAX_WORD_LEN + 1);
    assert_eq!(accept(&long), None);
    let exact = "a".repeat(MAX_WORD_LEN);
    assert!(accept(&exact).is_some());
  }

  #[test]
  fn case_folding_and_rejection_scenario() {
    // Mixed-case duplicates of "cat" fold to one accepted word; punctuation,
    // digits, and a blank line are all rejected (the blank line silently).
    let temp = write_temp("Cat\nCAT\ncat\nc-at\n123\n\n");
    let (_trie, report) = load_trie(temp.path()).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 2);
  }

  #[test]
  fn missing_file_is_input_open_error() {
    let path = Path::new("/nonexistent/path/to/words.txt");
    match load_trie(path) {
      Err(DawgError::InputOpen { .. }) => {}
      other => panic!("expected InputOpen error, got {other:?}"),
    }
  }
}
