use serde::{Deserialize, Serialize};

/// Decimal megabyte. Sizes are reported in MB = 10^6 bytes, not MiB.
pub const BYTES_PER_MB: f64 = 1_000_000.0;
pub const MB_PER_GB: f64 = 1_000.0;

/// Per-file numbers derived from the original and compressed byte sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FileMeasurement {
  pub input_size_mb: f64,
  pub output_size_mb: f64,
  /// `output / input`. Lower is better, `1.0` means no change.
  pub compression_ratio: f64,
  /// `input - output`. Negative when compression grew the file.
  pub reduction_mb: f64,
}

impl FileMeasurement {
  pub fn from_bytes(input_bytes: u64, output_bytes: u64) -> Self {
    let input_size_mb = input_bytes as f64 / BYTES_PER_MB;
    let output_size_mb = output_bytes as f64 / BYTES_PER_MB;

    // An empty original has no meaningful ratio; it is floored to 0.
    let compression_ratio = if input_size_mb > 0.0 { output_size_mb / input_size_mb } else { 0.0 };

    Self { input_size_mb, output_size_mb, compression_ratio, reduction_mb: input_size_mb - output_size_mb }
  }

  pub fn expanded(&self) -> bool {
    self.reduction_mb < 0.0
  }
}

/// Running totals for one report run.
#[derive(Debug, Default, Clone)]
pub struct StatsAccumulator {
  ratios: Vec<f64>,
  saved_mb: f64,
  skipped: usize,
}

impl StatsAccumulator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, measurement: &FileMeasurement) {
    self.ratios.push(measurement.compression_ratio);
    self.saved_mb += measurement.reduction_mb;
  }

  /// Skips are counted for logging only; they never touch the totals.
  pub fn record_skip(&mut self) {
    self.skipped += 1;
  }

  pub fn ratios(&self) -> &[f64] {
    &self.ratios
  }

  pub fn saved_mb(&self) -> f64 {
    self.saved_mb
  }

  /// Mean of the recorded ratios, `0.0` when nothing was measured.
  pub fn average_ratio(&self) -> f64 {
    if self.ratios.is_empty() {
      return 0.0;
    }
    self.ratios.iter().sum::<f64>() / self.ratios.len() as f64
  }

  pub fn summary(&self) -> Summary {
    let average_ratio = self.average_ratio();

    Summary {
      saved_mb: self.saved_mb,
      saved_gb: self.saved_mb / MB_PER_GB,
      average_ratio,
      // With nothing measured this is 100%, since the average ratio defaults to 0.
      average_savings_percent: (1.0 - average_ratio) * 100.0,
      measured: self.ratios.len(),
      skipped: self.skipped,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
  pub saved_mb: f64,
  pub saved_gb: f64,
  pub average_ratio: f64,
  pub average_savings_percent: f64,
  pub measured: usize,
  pub skipped: usize,
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f64 = 1e-9;

  #[test]
  fn measurement_uses_decimal_megabytes() {
    let m = FileMeasurement::from_bytes(10_000_000, 2_500_000);

    assert!((m.input_size_mb - 10.0).abs() < EPS);
    assert!((m.output_size_mb - 2.5).abs() < EPS);
    assert!((m.compression_ratio - 0.25).abs() < EPS);
    assert!((m.reduction_mb - 7.5).abs() < EPS);
    assert!(!m.expanded());
  }

  #[test]
  fn zero_input_floors_ratio_to_zero() {
    let m = FileMeasurement::from_bytes(0, 123_456_789);

    assert_eq!(m.compression_ratio, 0.0);
    assert!((m.reduction_mb + 123.456789).abs() < EPS);
  }

  #[test]
  fn reduction_matches_independent_computation() {
    for (input, output) in [(1u64, 0u64), (3_333_333, 1_111_111), (987_654_321, 12_345), (5, 7_000_000)] {
      let m = FileMeasurement::from_bytes(input, output);
      let expected = input as f64 / 1e6 - output as f64 / 1e6;
      assert!((m.reduction_mb - expected).abs() < EPS, "{input} -> {output}");
    }
  }

  #[test]
  fn expanded_file_reports_negative_reduction() {
    let m = FileMeasurement::from_bytes(1_000_000, 1_500_000);

    assert!(m.expanded());
    assert!((m.reduction_mb + 0.5).abs() < EPS);
    assert!((m.compression_ratio - 1.5).abs() < EPS);
  }

  #[test]
  fn empty_accumulator_defaults() {
    let mut acc = StatsAccumulator::new();
    acc.record_skip();

    let summary = acc.summary();
    assert_eq!(summary.average_ratio, 0.0);
    assert_eq!(summary.saved_gb, 0.0);
    assert_eq!(summary.average_savings_percent, 100.0);
    assert_eq!(summary.measured, 0);
    assert_eq!(summary.skipped, 1);
  }

  #[test]
  fn summary_averages_ratios_and_sums_savings() {
    let mut acc = StatsAccumulator::new();
    acc.record(&FileMeasurement::from_bytes(10_000_000, 2_500_000));
    acc.record(&FileMeasurement::from_bytes(4_000_000, 3_000_000));

    let summary = acc.summary();
    assert_eq!(acc.ratios().len(), 2);
    assert!((summary.average_ratio - 0.5).abs() < EPS);
    assert!((summary.average_savings_percent - 50.0).abs() < EPS);
    assert!((summary.saved_mb - 8.5).abs() < EPS);
    assert!((summary.saved_gb - 0.0085).abs() < EPS);
  }
}
