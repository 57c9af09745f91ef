use crate::paths::{CompstatPaths, ConfigError};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait ConfigBackend {
  /// The whole config document, or `None` when there is no config file.
  fn document(&self) -> Result<Option<toml::Table>, ConfigError>;

  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let doc = self.document()?.ok_or_else(|| ConfigError::Other("no config file".to_string()))?;

    let table =
      doc.get(section).ok_or_else(|| ConfigError::Other(format!("missing section [{section}]")))?;

    decode_section(section, table)
  }

  /// Like `load_section`, but a missing file or section yields `T::default()`.
  /// Keys absent from a present section fall back to their serde defaults.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(doc) = self.document()? else {
      return Ok(T::default());
    };

    let Some(table) = doc.get(section) else {
      return Ok(T::default());
    };

    decode_section(section, table)
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
  table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

pub struct TomlConfigBackend {
  config_file: Option<PathBuf>,
}

impl TomlConfigBackend {
  pub fn new(paths: Option<&CompstatPaths>) -> Self {
    Self { config_file: paths.map(CompstatPaths::config_file) }
  }

  /// Backend reading an explicit file instead of the discovered one.
  pub fn with_file(path: impl Into<PathBuf>) -> Self {
    Self { config_file: Some(path.into()) }
  }

  pub fn config_file(&self) -> Option<&Path> {
    self.config_file.as_deref()
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn document(&self) -> Result<Option<toml::Table>, ConfigError> {
    let Some(path) = &self.config_file else {
      return Ok(None);
    };

    let content = match std::fs::read_to_string(path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        debug!(path = %path.display(), "no config file");
        return Ok(None);
      }
      Err(e) => return Err(e.into()),
    };

    let doc: toml::Table = toml::from_str(&content)?;
    Ok(Some(doc))
  }
}
