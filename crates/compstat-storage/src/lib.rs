pub mod config;
pub mod models;
pub mod schema;

use std::path::{Path, PathBuf};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

use compstat_core::domain::{CompressJob, JobStatus};
use compstat_core::errors::CoreError;
use compstat_core::ports::JobSource;

pub use crate::config::StorageConfig;
use crate::models::JobRow;

/// Read-only view over the pipeline's `compress_jobs` table.
///
/// A connection is opened per `done_jobs` call and dropped as soon as the
/// rows are loaded.
pub struct SqliteJobStore {
  db_path: PathBuf,
  busy_timeout_ms: u64,
}

impl SqliteJobStore {
  pub fn new(db_path: impl Into<PathBuf>) -> Self {
    Self { db_path: db_path.into(), busy_timeout_ms: 0 }
  }

  pub fn from_config(cfg: &StorageConfig) -> Self {
    Self::new(cfg.db_path.clone()).with_busy_timeout(cfg.busy_timeout_ms)
  }

  pub fn with_busy_timeout(mut self, millis: u64) -> Self {
    self.busy_timeout_ms = millis;
    self
  }

  pub fn db_path(&self) -> &Path {
    &self.db_path
  }

  fn connect(&self) -> Result<SqliteConnection, CoreError> {
    // SQLite would happily create an empty database; a missing store must fail instead.
    if !self.db_path.exists() {
      return Err(CoreError::StoreNotFound(self.db_path.clone()));
    }

    let url = read_only_url(&self.db_path);
    debug!(%url, "opening job store");

    let mut conn = SqliteConnection::establish(&url)
      .map_err(|e| CoreError::Storage(format!("open {}: {e}", self.db_path.display())))?;

    if self.busy_timeout_ms > 0 {
      conn
        .batch_execute(&format!("PRAGMA busy_timeout = {};", self.busy_timeout_ms))
        .map_err(|e| CoreError::Storage(e.to_string()))?;
    }

    Ok(conn)
  }
}

impl JobSource for SqliteJobStore {
  fn done_jobs(&self) -> Result<Vec<CompressJob>, CoreError> {
    use crate::schema::compress_jobs;

    let rows = {
      let mut conn = self.connect()?;

      compress_jobs::table
        .filter(compress_jobs::status.eq(JobStatus::Done.as_str()))
        .select(JobRow::as_select())
        .load::<JobRow>(&mut conn)
        .map_err(|e| CoreError::Storage(e.to_string()))?
    };

    debug!(rows = rows.len(), "loaded done rows");

    rows.into_iter().map(row_to_job).collect()
  }
}

fn row_to_job(row: JobRow) -> Result<CompressJob, CoreError> {
  let corrupt = |what: String| CoreError::Storage(format!("job {:?}: {what}", row.source_path));

  let size = u64::try_from(row.size).map_err(|_| corrupt(format!("negative size {}", row.size)))?;
  let partial_sha256 =
    hex::decode(&row.partial_sha256).map_err(|e| corrupt(format!("partial_sha256: {e}")))?;
  let status = row.status.parse::<JobStatus>().map_err(|e| corrupt(e.to_string()))?;

  Ok(CompressJob {
    source_path: PathBuf::from(row.source_path),
    output_path: row.output_path.map(PathBuf::from),
    size,
    mtime_ms: row.mtime_ms,
    partial_sha256,
    status,
    last_error: row.last_error,
    updated_at: row.updated_at,
  })
}

/// SQLite URI opening `path` read-only. `%`, `?` and `#` would otherwise be
/// taken as URI syntax.
fn read_only_url(path: &Path) -> String {
  let raw = path.to_string_lossy();
  let mut escaped = String::with_capacity(raw.len());

  for c in raw.chars() {
    match c {
      '%' => escaped.push_str("%25"),
      '?' => escaped.push_str("%3F"),
      '#' => escaped.push_str("%23"),
      _ => escaped.push(c),
    }
  }

  format!("file:{escaped}?mode=ro")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn row(size: i64, partial: &str, status: &str) -> JobRow {
    JobRow {
      source_path: "/in/clip.mp4".to_string(),
      size,
      mtime_ms: 1_700_000_000_000,
      partial_sha256: partial.to_string(),
      output_path: Some("/out/clip.mp4".to_string()),
      status: status.to_string(),
      last_error: None,
      updated_at: 1_700_000_000_500,
    }
  }

  #[test]
  fn url_is_read_only() {
    assert_eq!(read_only_url(Path::new("compressed.db")), "file:compressed.db?mode=ro");
    assert_eq!(read_only_url(Path::new("/srv/jobs.db")), "file:/srv/jobs.db?mode=ro");
  }

  #[test]
  fn url_escapes_uri_syntax() {
    assert_eq!(read_only_url(Path::new("/tmp/a#b?c%d.db")), "file:/tmp/a%23b%3Fc%25d.db?mode=ro");
  }

  #[test]
  fn row_decodes_fingerprint() {
    let job = row_to_job(row(42, "00ff10", "DONE")).unwrap();

    assert_eq!(job.size, 42);
    assert_eq!(job.partial_sha256, vec![0x00, 0xff, 0x10]);
    assert_eq!(job.status, JobStatus::Done);
    assert_eq!(job.output_path, Some(PathBuf::from("/out/clip.mp4")));
  }

  #[test]
  fn corrupt_rows_are_storage_errors() {
    for bad in [row(-1, "00", "DONE"), row(1, "zz", "DONE"), row(1, "00", "done")] {
      assert!(matches!(row_to_job(bad), Err(CoreError::Storage(_))));
    }
  }
}
