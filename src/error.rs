//! The recoverable error taxonomy. Allocation failure is deliberately
//! absent: under Rust's global allocator contract that's a process abort,
//! not a value this enum could carry.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DawgError {
  #[error("could not open word list {path}: {source}")]
  InputOpen {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("could not write packed output {path}: {source}")]
  OutputWrite {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error(
    "packed array would need {records} records, exceeding the 2^25 record ceiling (25-bit next pointer)"
  )]
  CapacityOverflow { records: usize },
}
