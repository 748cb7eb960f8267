use clap::Parser;
use tracing_subscriber::EnvFilter;

use dawg_builder::cli::Args;

fn main() {
  let args = Args::parse();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::new(args.log_level()))
    .without_time()
    .init();

  if let Err(err) = run(&args) {
    tracing::error!("{err}");
    std::process::exit(1);
  }
}

fn run(args: &Args) -> Result<(), dawg_builder::error::DawgError> {
  let stats = dawg_builder::build(&args.input, &args.output)?;
  stats.log_summary();
  Ok(())
}
