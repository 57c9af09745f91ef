use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use thiserror::Error;

use compstat_core::ports::{OutputProbe, ProbeError};

#[derive(Debug, Error)]
pub enum FsError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("not a regular file: {0}")]
  NotAFile(String),
}

/// Size in bytes of the regular file at `path`, from metadata only.
///
/// Symlinks are followed, so a dangling link is reported as not found.
pub fn file_size(path: &Path) -> Result<u64, FsError> {
  let meta = fs::metadata(path)?;

  if !meta.is_file() {
    return Err(FsError::NotAFile(path.display().to_string()));
  }

  Ok(meta.len())
}

/// `OutputProbe` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FsProbe {
  pub fn new() -> Self {
    Self
  }
}

impl OutputProbe for FsProbe {
  fn output_size(&self, path: &Path) -> Result<u64, ProbeError> {
    file_size(path).map_err(map_fs_error)
  }
}

fn map_fs_error(e: FsError) -> ProbeError {
  match e {
    FsError::Io(io) if io.kind() == ErrorKind::NotFound => ProbeError::NotFound,
    FsError::Io(io) => ProbeError::Io(io.to_string()),
    FsError::NotAFile(_) => ProbeError::NotAFile,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn reports_byte_length() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("out.mp4");
    fs::write(&path, vec![0u8; 4096]).unwrap();

    assert_eq!(FsProbe::new().output_size(&path).unwrap(), 4096);
  }

  #[test]
  fn missing_file_is_not_found() {
    let tmp = tempdir().unwrap();

    let err = FsProbe::new().output_size(&tmp.path().join("nope.mp4")).unwrap_err();

    assert!(matches!(err, ProbeError::NotFound));
  }

  #[test]
  fn directory_is_not_a_file() {
    let tmp = tempdir().unwrap();

    let err = FsProbe::new().output_size(tmp.path()).unwrap_err();

    assert!(matches!(err, ProbeError::NotAFile));
  }

  #[cfg(unix)]
  #[test]
  fn dangling_symlink_is_not_found() {
    let tmp = tempdir().unwrap();
    let link = tmp.path().join("link.mp4");
    std::os::unix::fs::symlink(tmp.path().join("target.mp4"), &link).unwrap();

    let err = FsProbe::new().output_size(&link).unwrap_err();

    assert!(matches!(err, ProbeError::NotFound));
  }
}
