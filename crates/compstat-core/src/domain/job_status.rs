use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle of a compression job as written by the producing pipeline.
///
/// The store keeps it as upper-case text (`RUNNING`, `DONE`, `FAILED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
  Running,
  /// Terminal state. Only these rows are reported.
  Done,
  Failed,
}

impl JobStatus {
  pub fn as_str(&self) -> &'static str {
    match self {
      JobStatus::Running => "RUNNING",
      JobStatus::Done => "DONE",
      JobStatus::Failed => "FAILED",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown job status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for JobStatus {
  type Err = UnknownStatus;

  /// Matching is exact: the producer only ever writes the upper-case forms.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "RUNNING" => Ok(JobStatus::Running),
      "DONE" => Ok(JobStatus::Done),
      "FAILED" => Ok(JobStatus::Failed),
      other => Err(UnknownStatus(other.to_string())),
    }
  }
}

impl fmt::Display for JobStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_stored_forms() {
    for status in [JobStatus::Running, JobStatus::Done, JobStatus::Failed] {
      assert_eq!(status.as_str().parse::<JobStatus>(), Ok(status));
    }
  }

  #[test]
  fn rejects_other_casing() {
    let err = "done".parse::<JobStatus>().unwrap_err();
    assert_eq!(err, UnknownStatus("done".to_string()));
  }
}
