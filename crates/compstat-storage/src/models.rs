use crate::schema::compress_jobs;

use diesel::prelude::*;

#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = compress_jobs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct JobRow {
  pub source_path: String,
  pub size: i64,
  pub mtime_ms: i64,
  /// Hex text, decoded into bytes by the store.
  pub partial_sha256: String,
  pub output_path: Option<String>,
  pub status: String,
  pub last_error: Option<String>,
  pub updated_at: i64,
}
