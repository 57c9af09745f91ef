use crate::domain::CompressJob;
use crate::errors::CoreError;

/// Read side of the external job store.
pub trait JobSource {
  /// Every job in the `Done` state, in whatever order the store yields them.
  ///
  /// Implementations must never create or modify the store.
  fn done_jobs(&self) -> Result<Vec<CompressJob>, CoreError>;
}
