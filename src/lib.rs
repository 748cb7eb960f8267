//! Compiles a plain-text word list into a minimized, immutable Directed
//! Acyclic Word Graph (DAWG) and serialises it to a fixed little-endian
//! binary layout.
//!
//! The pipeline is a strict sequence of passes, one module per phase:
//! [`trie`] (insertion + edge-terminal migration), [`minimize`]
//! (structural deduplication), [`flatten`] (two-pass BFS layout),
//! [`record`] (bit-packing + serialization), and [`walk`] (the read-side
//! format contract). [`input`], [`stats`], [`cli`], and [`error`] are the
//! ambient concerns around that core.

pub mod cli;
pub mod error;
pub mod flatten;
pub mod input;
pub mod minimize;
pub mod record;
pub mod stats;
pub mod trie;
pub mod walk;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use error::DawgError;
use stats::BuildStats;

/// Runs the full pipeline end to end: load, migrate, minimize, flatten,
/// serialize, and verify by walking the file just written.
pub fn build(input_path: &Path, output_path: &Path) -> Result<BuildStats, DawgError> {
  tracing::debug!(path = %input_path.display(), "loading word list");
  let (mut graph, report) = input::load_trie(input_path)?;
  let trie_nodes = graph.node_count();

  tracing::debug!("migrating edge-terminal flags");
  trie::migrate_edge_terminals(&mut graph);

  tracing::debug!("minimizing");
  let min_stats = minimize::minimize(&mut graph);

  tracing::debug!("flattening");
  let records = flatten::flatten(&graph)?;

  tracing::debug!(path = %output_path.display(), "writing packed output");
  write_packed_file(output_path, &records)?;

  tracing::debug!("verifying by walking the written file");
  let written = std::fs::read(output_path).map_err(|source| DawgError::OutputWrite {
    path: output_path.to_path_buf(),
    source,
  })?;
  let verified = walk::count_words(&walk::records_from_bytes(&written));

  Ok(BuildStats {
    loaded: report.loaded,
    skipped: report.skipped,
    trie_nodes,
    dawg_nodes: min_stats.canonical_node_count,
    record_count: records.len(),
    byte_size: records.len() * 4,
    verified_words: verified,
  })
}

fn write_packed_file(path: &Path, records: &[record::Record]) -> Result<(), DawgError> {
  let to_error = |source: std::io::Error| DawgError::OutputWrite {
    path: path.to_path_buf(),
    source,
  };

  let file = File::create(path).map_err(to_error)?;
  let mut writer = BufWriter::new(file);
  record::write_packed(&mut writer, records).map_err(to_error)?;
  writer.flush().map_err(to_error)
}
