use super::Trie;

/// Rewrites the per-node `is_end` flag onto the incoming edges of each node.
/// After this runs, a node's own `is_end` is never consulted again by the
/// core — identity under minimization depends only on outgoing structure,
/// not on whether the path leading here happens to spell a word.
///
/// Traversal order doesn't matter: a parent's write only reads its
/// children's `is_end`, which this pass never modifies.
pub fn migrate_edge_terminals(trie: &mut Trie) {
  for i in 0..trie.node_count() {
    let id = super::NodeId(i as u32);
    let children = *trie.children(id);
    for (slot, child) in children.iter().enumerate() {
      if let Some(child_id) = child {
        let end = trie.is_end(*child_id);
        trie.set_edge_terminal(id, slot, end);
      }
    }
  }
}
