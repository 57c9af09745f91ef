use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors of a report run.
///
/// The binary maps these to a message on stderr and a non-zero exit. A missing
/// output file is not represented here: the service turns it into a skip.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("job store not found: {}", .0.display())]
  StoreNotFound(PathBuf),

  #[error("storage error: {0}")]
  Storage(String),

  #[error("report error: {0}")]
  Report(String),
}
