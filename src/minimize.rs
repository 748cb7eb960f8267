//! Bottom-up minimization: collapses subtree-isomorphic nodes in place,
//! turning the trie into a DAG whose surviving nodes are pairwise
//! structurally distinct.

use std::collections::HashMap;

use crate::trie::{NodeId, Trie};

/// The equivalence key for minimization: the ordered 26-tuple of
/// `(canonical child identity, edge-terminal flag)` pairs. Two nodes merge
/// iff their signatures are equal. This is plain, immutable data — keying
/// the table on it (rather than on a node handle) sidesteps the hazard of
/// mutating a key while it sits in the table, since a `Signature` is
/// computed once, after all of a node's children are already canonical, and
/// never touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Signature {
  children: [Option<NodeId>; 26],
  edge_terminal: [bool; 26],
}

pub struct MinimizeStats {
  /// Number of pairwise-distinct canonical nodes reachable from the root,
  /// including the root itself (which is never looked up in the signature
  /// table but is still one node of the resulting DAG).
  pub canonical_node_count: usize,
}

/// Canonicalizes `trie` in place: every child slot ends up pointing at the
/// representative of its subtree's equivalence class.
pub fn minimize(trie: &mut Trie) -> MinimizeStats {
  let mut table: HashMap<Signature, NodeId> = HashMap::new();
  let mut canonical: Vec<Option<NodeId>> = vec![None; trie.node_count()];

  let root = trie.root();
  let root_children: Vec<(usize, NodeId)> = trie
    .children(root)
    .iter()
    .enumerate()
    .filter_map(|(slot, child)| child.map(|id| (slot, id)))
    .collect();

  for (slot, child) in root_children {
    let rep = canonicalize(trie, child, &mut table, &mut canonical);
    trie.children_mut(root)[slot] = Some(rep);
  }

  MinimizeStats {
    canonical_node_count: table.len() + 1,
  }
}

/// Post-order canonicalization of a single subtree. `canonical[id]` doubles
/// as the "done" guard: a node revisited through a
/// second path (the graph being walked is a DAG, even before minimization
/// finishes merging it) returns its already-computed representative instead
/// of being reprocessed.
fn canonicalize(
  trie: &mut Trie,
  id: NodeId,
  table: &mut HashMap<Signature, NodeId>,
  canonical: &mut [Option<NodeId>],
) -> NodeId {
  if let Some(rep) = canonical[id.index()] {
    return rep;
  }

  let children = *trie.children(id);
  for (slot, child) in children.iter().enumerate() {
    if let Some(child_id) = child {
      let rep = canonicalize(trie, *child_id, table, canonical);
      trie.children_mut(id)[slot] = Some(rep);
    }
  }

  let signature = Signature {
    children: *trie.children(id),
    edge_terminal: *trie.edge_terminal(id),
  };

  let rep = *table.entry(signature).or_insert(id);
  canonical[id.index()] = Some(rep);
  rep
}
