use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "compstat", version, about = "Report space saved by finished compression jobs")]
pub struct Args {
  /// Job store to read. Overrides `[storage] db_path` from compstat.toml.
  #[arg(long, value_name = "PATH")]
  pub db: Option<PathBuf>,

  /// When to style the output.
  #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
  pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Auto,
  Always,
  Never,
}

impl From<ColorMode> for anstream::ColorChoice {
  fn from(mode: ColorMode) -> Self {
    match mode {
      ColorMode::Auto => anstream::ColorChoice::Auto,
      ColorMode::Always => anstream::ColorChoice::Always,
      ColorMode::Never => anstream::ColorChoice::Never,
    }
  }
}
