use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::domain::JobStatus;

/// One row of the external job table: a single file's compression task.
///
/// The reporter treats it as an immutable snapshot. Only `source_path`,
/// `output_path` and `size` feed the statistics; the rest is carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressJob {
  /// Original (pre-compression) file.
  pub source_path: PathBuf,
  /// Compressed result, if the pipeline produced one.
  pub output_path: Option<PathBuf>,
  /// Original size in bytes, recorded when the job was created.
  pub size: u64,
  pub mtime_ms: i64,
  /// Fingerprint of the head of the original file, used upstream for change detection.
  pub partial_sha256: Vec<u8>,
  pub status: JobStatus,
  pub last_error: Option<String>,
  /// Epoch milliseconds.
  pub updated_at: i64,
}

impl CompressJob {
  /// Name shown in the report: the last component of `source_path`, or the
  /// whole path when there is none (e.g. `/` or `..`).
  pub fn display_name(&self) -> Cow<'_, str> {
    match self.source_path.file_name() {
      Some(name) => name.to_string_lossy(),
      None => self.source_path.to_string_lossy(),
    }
  }
}

#[cfg(test)]
pub(crate) fn done_job(source: &str, output: Option<&str>, size: u64) -> CompressJob {
  CompressJob {
    source_path: PathBuf::from(source),
    output_path: output.map(PathBuf::from),
    size,
    mtime_ms: 0,
    partial_sha256: vec![0xab, 0xcd],
    status: JobStatus::Done,
    last_error: None,
    updated_at: 0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_name_is_file_name() {
    let job = done_job("/videos/2024/clip.mp4", None, 1);
    assert_eq!(job.display_name(), "clip.mp4");
  }

  #[test]
  fn display_name_falls_back_to_path() {
    let job = done_job("/", None, 1);
    assert_eq!(job.display_name(), "/");
  }
}
