use compstat_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
  /// Job store written by the compression pipeline.
  #[serde(default = "default_db_path")]
  pub db_path: PathBuf,

  /// How long a read waits on the pipeline's write lock. `0` fails immediately.
  #[serde(default = "default_busy_timeout_ms")]
  pub busy_timeout_ms: u64,
}

fn default_db_path() -> PathBuf {
  PathBuf::from("compressed.db")
}

fn default_busy_timeout_ms() -> u64 {
  5_000
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { db_path: default_db_path(), busy_timeout_ms: default_busy_timeout_ms() }
  }
}

impl StorageConfig {
  /// Loads `[storage]` from compstat.toml; no file or no section means defaults.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&*CONFIG_BACKEND)
  }

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default("storage")
  }
}
