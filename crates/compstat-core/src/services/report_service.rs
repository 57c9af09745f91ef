use tracing::{debug, info, warn};

use crate::domain::CompressJob;
use crate::errors::CoreError;
use crate::ports::{JobSource, OutputProbe, ProbeError, ReportSink};
use crate::stats::{FileMeasurement, StatsAccumulator, Summary};

/// Outcome of looking at one job's output.
#[derive(Debug)]
enum Resolved {
  Measured(FileMeasurement),
  Skipped(SkipReason),
}

#[derive(Debug)]
enum SkipReason {
  NoOutputPath,
  Probe(ProbeError),
}

pub struct ReportService<S, P>
where
  S: JobSource,
  P: OutputProbe,
{
  source: S,
  probe: P,
}

impl<S, P> ReportService<S, P>
where
  S: JobSource,
  P: OutputProbe,
{
  pub fn new(source: S, probe: P) -> Self {
    Self { source, probe }
  }

  /// Runs one report pass:
  /// - loads every done job (fatal on failure, before anything is emitted)
  /// - measures each output, skipping the ones that cannot be found
  /// - hands per-file results and the final summary to `sink`
  pub fn run<R: ReportSink>(&self, sink: &mut R) -> Result<Summary, CoreError> {
    let jobs = self.source.done_jobs()?;
    debug!(jobs = jobs.len(), "loaded done jobs");

    let mut stats = StatsAccumulator::new();

    for job in &jobs {
      match self.resolve(job) {
        Resolved::Measured(measurement) => {
          if measurement.expanded() {
            warn!(
              source = %job.source_path.display(),
              reduction_mb = measurement.reduction_mb,
              "compressed output is larger than the original"
            );
          }
          stats.record(&measurement);
          sink.on_measured(job, &measurement)?;
        }
        Resolved::Skipped(reason) => {
          debug!(source = %job.source_path.display(), ?reason, "skipping job");
          stats.record_skip();
          sink.on_skipped(job)?;
        }
      }
    }

    let summary = stats.summary();
    info!(measured = summary.measured, skipped = summary.skipped, "report complete");

    sink.finish(&summary)?;
    Ok(summary)
  }

  fn resolve(&self, job: &CompressJob) -> Resolved {
    let Some(output_path) = job.output_path.as_deref() else {
      return Resolved::Skipped(SkipReason::NoOutputPath);
    };

    match self.probe.output_size(output_path) {
      Ok(output_bytes) => Resolved::Measured(FileMeasurement::from_bytes(job.size, output_bytes)),
      Err(e) => Resolved::Skipped(SkipReason::Probe(e)),
    }
  }
}
