use crate::domain::CompressJob;
use crate::errors::CoreError;
use crate::stats::{FileMeasurement, Summary};

/// Output port for the report.
///
/// Called in job order, then `finish` exactly once. A sink error aborts the run.
pub trait ReportSink {
  fn on_measured(&mut self, job: &CompressJob, measurement: &FileMeasurement) -> Result<(), CoreError>;
  fn on_skipped(&mut self, job: &CompressJob) -> Result<(), CoreError>;
  fn finish(&mut self, summary: &Summary) -> Result<(), CoreError>;
}
