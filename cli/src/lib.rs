mod args;
pub mod infrastructure;
pub mod logging;

use std::io::Write;

use anyhow::Context;
use tracing::debug;

use compstat_core::services::ReportService;
use compstat_core::stats::Summary;
use compstat_fs::FsProbe;
use compstat_storage::{SqliteJobStore, StorageConfig};

pub use args::{Args, ColorMode};
use infrastructure::reporter::TerminalReporter;

/// Entry point of the binary: resolves the store location and prints the
/// report to stdout.
pub fn run(args: Args) -> anyhow::Result<()> {
  anstream::ColorChoice::from(args.color).write_global();

  let mut storage = StorageConfig::load().context("failed to load configuration")?;
  if let Some(db) = args.db {
    storage.db_path = db;
  }
  debug!(db = %storage.db_path.display(), "resolved job store");

  let stdout = anstream::stdout();
  report(&storage, stdout.lock())?;

  Ok(())
}

/// Runs one report pass against the store described by `storage`, writing
/// the report to `out`.
pub fn report<W: Write>(storage: &StorageConfig, out: W) -> anyhow::Result<Summary> {
  // 1. Job source (SQLite, read-only)
  let store = SqliteJobStore::from_config(storage);

  // 2. Output sizes (filesystem metadata)
  let probe = FsProbe::new();

  // 3. Report sink (terminal text)
  let mut reporter = TerminalReporter::new(out);

  let service = ReportService::new(store, probe);
  let summary = service
    .run(&mut reporter)
    .with_context(|| format!("failed to report on {}", storage.db_path.display()))?;

  Ok(summary)
}
