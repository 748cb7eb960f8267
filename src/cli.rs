//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compiles a word list into a minimized DAWG")]
pub struct Args {
  /// Input word-list path.
  #[arg(default_value = "words.txt")]
  pub input: PathBuf,

  /// Output packed-binary path.
  #[arg(default_value = "dawg.bin")]
  pub output: PathBuf,

  /// Log per-phase progress in addition to the final summary.
  #[arg(short, long, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress the summary, reporting only warnings and errors.
  #[arg(short, long)]
  pub quiet: bool,
}

impl Args {
  /// The `tracing` filter directive implied by `--verbose`/`--quiet`.
  pub fn log_level(&self) -> &'static str {
    if self.quiet {
      "warn"
    } else if self.verbose {
      "debug"
    } else {
      "info"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_spec() {
    let args = Args::parse_from(["dawg_builder"]);
    assert_eq!(args.input, PathBuf::from("words.txt"));
    assert_eq!(args.output, PathBuf::from("dawg.bin"));
    assert!(!args.verbose);
    assert!(!args.quiet);
    assert_eq!(args.log_level(), "info");
  }

  #[test]
  fn verbose_and_quiet_select_log_level() {
    let args = Args::parse_from(["dawg_builder", "--verbose"]);
    assert_eq!(args.log_level(), "debug");

    let args = Args::parse_from(["dawg_builder", "-q"]);
    assert_eq!(args.log_level(), "warn");
  }

  #[test]
  fn positional_paths_are_overridable() {
    let args = Args::parse_from(["dawg_builder", "my_words.txt", "out.bin"]);
    assert_eq!(args.input, PathBuf::from("my_words.txt"));
    assert_eq!(args.output, PathBuf::from("out.bin"));
  }
}
