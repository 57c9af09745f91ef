use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
  #[error("file not found")]
  NotFound,

  #[error("not a regular file")]
  NotAFile,

  #[error("io error: {0}")]
  Io(String),
}

/// Measures compressed outputs.
///
/// Only metadata may be consulted; file contents are never read. Any error is
/// treated by the service as a missing output (a skip), never as fatal.
pub trait OutputProbe {
  fn output_size(&self, path: &Path) -> Result<u64, ProbeError>;
}
