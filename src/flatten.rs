//! The two-pass flattener: turns the minimized DAG into a deterministic
//! array of packed edge records.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::DawgError;
use crate::record::{Record, MAX_NEXT};
use crate::trie::{NodeId, Trie};

/// Hard ceiling from the 25-bit next-pointer field: a record can't address
/// an offset past this.
const MAX_RECORDS: usize = (MAX_NEXT as usize) + 1;

/// Runs both BFS passes and returns the packed record array.
pub fn flatten(trie: &Trie) -> Result<Vec<Record>, DawgError> {
  let root = trie.root();
  let offsets = assign_offsets(trie, root)?;
  let record_count = offsets.total;
  let records = fill_records(trie, root, &offsets.table, record_count);
  Ok(records)
}

struct Offsets {
  table: HashMap<NodeId, u32>,
  total: usize,
}

/// Pass 1: base offset of every reachable internal node, as the running sum
/// of children counts in BFS discovery order from the root.
fn assign_offsets(trie: &Trie, root: NodeId) -> Result<Offsets, DawgError> {
  let mut table = HashMap::new();
  let mut queue = VecDeque::new();
  queue.push_back(root);
  let mut total = trie.children_count(root);
  check_capacity(total)?;

  while let Some(node) = queue.pop_front() {
    for child in trie.children(node).iter().flatten() {
      let count = trie.children_count(*child);
      if count > 0 && !table.contains_key(child) {
        table.insert(*child, total as u32);
        total += count;
        check_capacity(total)?;
        queue.push_back(*child);
      }
    }
  }

  Ok(Offsets { table, total })
}

fn check_capacity(total: usize) -> Result<(), DawgError> {
  if total > MAX_RECORDS {
    return Err(DawgError::CapacityOverflow { records: total });
  }
  Ok(())
}

/// Pass 2: BFS again from the root, writing one record per non-empty slot
/// of each node into its pre-assigned base offset.
fn fill_records(
  trie: &Trie,
  root: NodeId,
  offsets: &HashMap<NodeId, u32>,
  record_count: usize,
) -> Vec<Record> {
  let mut records = vec![Record::EMPTY; record_count];
  let mut visited = HashSet::new();
  let mut queue = VecDeque::new();
  queue.push_back(root);
  visited.insert(root);

  while let Some(node) = queue.pop_front() {
    let base = if node == root { 0 } else { offsets[&node] };
    let children = trie.children(node);
    let edge_terminal = trie.edge_terminal(node);
    let non_empty: Vec<usize> = (0..26).filter(|&i| children[i].is_some()).collect();
    let last_slot = non_empty.last().copied();

    for (slot_position, &letter_slot) in non_empty.iter().enumerate() {
      let child = children[letter_slot].expect("slot filtered to non-empty above");
      let next = offsets.get(&child).copied().unwrap_or(0);
      let record = Record::new(
        (letter_slot + 1) as u8,
        edge_terminal[letter_slot],
        Some(letter_slot) == last_slot,
        next,
      );
      records[base as usize + slot_position] = record;

      if trie.children_count(child) > 0 && visited.insert(child) {
        queue.push_back(child);
      }
    }
  }

  records
}
