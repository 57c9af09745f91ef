mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{CompstatPaths, ConfigError};

use once_cell::sync::Lazy;
use tracing::warn;

// Paths singleton. Without a home directory there is no config file to read,
// which behaves the same as a missing file.
pub static PATHS: Lazy<Option<CompstatPaths>> = Lazy::new(|| match CompstatPaths::detect() {
  Ok(paths) => Some(paths),
  Err(e) => {
    warn!(error = %e, "config directory unavailable, using defaults");
    None
  }
});

// Config backend singleton
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new((*PATHS).as_ref()));
