//! The read-side walker: the authoritative definition of what a packed file
//! means. Any builder whose output this walker accepts as encoding exactly
//! the input word set is correct.
//!
//! Uses an explicit stack rather than native recursion, so a pathologically
//! long word chain can't overflow the call stack — see DESIGN.md.

use std::fs;
use std::io;
use std::path::Path;

use crate::record::Record;

/// Parses a byte buffer as little-endian 32-bit records.
pub fn records_from_bytes(bytes: &[u8]) -> Vec<Record> {
  bytes
    .chunks_exact(4)
    .map(|chunk| {
      let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
      Record::from_u32(raw)
    })
    .collect()
}

/// Walks the packed array and returns every member word. An empty array
/// walks to an empty word set.
pub fn collect_words(records: &[Record]) -> Vec<String> {
  let mut words = Vec::new();
  if records.is_empty() {
    return words;
  }

  // Each stack entry is a position within a sibling list plus the prefix
  // spelled by the path taken to reach it. Popping the sibling's successor
  // entry before its child's sublist would also be a valid DFS order; we
  // push the child first so the sibling entry (if any) is visited after the
  // whole subtree under it, matching the depth-first recursion the format
  // contract describes without any native recursion.
  let mut stack: Vec<(usize, String)> = vec![(0, String::new())];

  while let Some((index, prefix)) = stack.pop() {
    let record = records[index];
    let mut word = prefix.clone();
    word.push(record.letter_char());

    if record.end_of_word() {
      words.push(word.clone());
    }

    if !record.end_of_node() {
      stack.push((index + 1, prefix));
    }
    if record.next() != 0 {
      stack.push((record.next() as usize, word));
    }
  }

  words
}

/// Number of member words, without materializing any of the words
/// themselves. Same traversal shape as [`collect_words`], minus the prefix
/// string: a shared sibling block reached through two different paths still
/// contributes one word per path, so this walks the DAG rather than just
/// counting `end_of_word` bits in the array.
pub fn count_words(records: &[Record]) -> usize {
  if records.is_empty() {
    return 0;
  }

  let mut count = 0;
  let mut stack = vec![0usize];

  while let Some(index) = stack.pop() {
    let record = records[index];
    if record.end_of_word() {
      count += 1;
    }
    if !record.end_of_node() {
      stack.push(index + 1);
    }
    if record.next() != 0 {
      stack.push(record.next() as usize);
    }
  }

  count
}

/// Reads a packed file from disk and walks it.
pub fn walk_file(path: &Path) -> io::Result<Vec<String>> {
  let bytes = fs::read(path)?;
  Ok(collect_words(&records_from_bytes(&bytes)))
}
