//! Binary entrypoint: read log sources, write one Summary JSON line to stdout.
//!
//! Each argument is a log file treated as one source; with no arguments stdin is
//! the only source. Output lines are either:
//! - An ErrorOutput (when a source file cannot be read; it then counts as empty)
//! - The Summary (always last)
//!
//! Diagnostics go to stderr via tracing; `RUST_LOG` controls verbosity.

use std::io::{self, Read, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_engine::{source, Config, Engine, EngineError};

fn init_logging() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "triage_engine=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();
}

fn main() {
  init_logging();

  if let Err(e) = run_binary() {
    tracing::error!("triage-engine: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let engine = Engine::new(Config::load()?);

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let paths: Vec<String> = std::env::args().skip(1).collect();
  let sources: Vec<Vec<String>> = if paths.is_empty() {
    let mut raw = Vec::new();
    io::stdin()
      .lock()
      .read_to_end(&mut raw)
      .map_err(|e| EngineError::io("<stdin>", e))?;
    vec![source::lines_from_bytes(&raw)]
  } else {
    let batch = source::read_files(&paths);
    for err in &batch.errors {
      serde_json::to_writer(&mut out, err)?;
      writeln!(out).map_err(|e| EngineError::io("<stdout>", e))?;
    }
    batch.sources
  };

  let total_lines: usize = sources.iter().map(Vec::len).sum();
  tracing::info!(sources = sources.len(), lines = total_lines, "analyzing logs");

  let summary = engine.run(&sources);
  serde_json::to_writer(&mut out, &summary)?;
  writeln!(out).map_err(|e| EngineError::io("<stdout>", e))?;
  out.flush().map_err(|e| EngineError::io("<stdout>", e))?;
  Ok(())
}
