use std::io::{self, Write};

use anstyle::{AnsiColor, Color, Effects, Style};

use compstat_core::domain::CompressJob;
use compstat_core::errors::CoreError;
use compstat_core::ports::ReportSink;
use compstat_core::stats::{FileMeasurement, Summary};

const FILE_NAME: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const LABEL: Style = Style::new().effects(Effects::BOLD);
const VALUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const NOT_FOUND: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const TOTAL: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const COMPLETE: Style = TOTAL.effects(Effects::BOLD);

const FILE_INDENT: &str = "        ";
const SUMMARY_INDENT: &str = "    ";

/// A `ReportSink` writing the human-readable report.
///
/// Styles are always emitted; hand it an `anstream` stream so they get
/// stripped when the destination is not a terminal. Stripped, the text is
/// what downstream scrapers parse, so labels and spacing must not change.
pub struct TerminalReporter<W: Write> {
  out: W,
}

impl<W: Write> TerminalReporter<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  fn file_header(&mut self, job: &CompressJob) -> io::Result<()> {
    writeln!(self.out, "FILE ({}{}{}):", FILE_NAME.render(), job.display_name(), FILE_NAME.render_reset())
  }

  fn metric(&mut self, label: &str, value: f64, unit: &str) -> io::Result<()> {
    writeln!(
      self.out,
      "{FILE_INDENT}{}{label}{}: {}{value:.2}{}{unit}",
      LABEL.render(),
      LABEL.render_reset(),
      VALUE.render(),
      VALUE.render_reset(),
    )
  }

  fn total(&mut self, label: &str, value: f64, unit: &str) -> io::Result<()> {
    writeln!(
      self.out,
      "{SUMMARY_INDENT}{}{label}{}: {}{value:.2}{unit}{}",
      LABEL.render(),
      LABEL.render_reset(),
      TOTAL.render(),
      TOTAL.render_reset(),
    )
  }
}

impl<W: Write> ReportSink for TerminalReporter<W> {
  fn on_measured(&mut self, job: &CompressJob, m: &FileMeasurement) -> Result<(), CoreError> {
    self.file_header(job).map_err(write_error)?;
    self.metric("Input Size", m.input_size_mb, " MB").map_err(write_error)?;
    self.metric("Output Size", m.output_size_mb, " MB").map_err(write_error)?;
    self.metric("Compression Ratio", m.compression_ratio, "").map_err(write_error)?;
    self.metric("Size Reduction", m.reduction_mb, " MB").map_err(write_error)
  }

  fn on_skipped(&mut self, job: &CompressJob) -> Result<(), CoreError> {
    self.file_header(job).map_err(write_error)?;
    writeln!(
      self.out,
      "{FILE_INDENT}{}Not found. Skipping...{}",
      NOT_FOUND.render(),
      NOT_FOUND.render_reset()
    )
    .map_err(write_error)
  }

  fn finish(&mut self, summary: &Summary) -> Result<(), CoreError> {
    writeln!(self.out).map_err(write_error)?;
    writeln!(self.out, "{}COMPLETE{}:", COMPLETE.render(), COMPLETE.render_reset()).map_err(write_error)?;
    self.total("Saved", summary.saved_gb, "GB").map_err(write_error)?;
    self.total("Average Reduction", summary.average_savings_percent, "%").map_err(write_error)?;
    self.out.flush().map_err(write_error)
  }
}

fn write_error(e: io::Error) -> CoreError {
  CoreError::Report(e.to_string())
}
