use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub const BASE_DIR_ENV: &str = "COMPSTAT_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

#[derive(Debug, Clone)]
pub struct CompstatPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl CompstatPaths {
  /// Resolves the directories without creating them; the reporter never
  /// writes anything of its own.
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      let base_dir = PathBuf::from(env_base);
      let config_dir = base_dir.join("config");
      return Ok(Self { base_dir, config_dir });
    }

    let proj_dirs = ProjectDirs::from("com", "compstat", "compstat").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("compstat.toml")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  struct EnvVarGuard {
    key: String,
    original: Option<String>,
  }

  impl EnvVarGuard {
    fn new(key: &str, value: &str) -> Self {
      let original = std::env::var(key).ok();
      unsafe { std::env::set_var(key, value) };
      EnvVarGuard { key: key.to_owned(), original }
    }
  }

  impl Drop for EnvVarGuard {
    fn drop(&mut self) {
      match &self.original {
        Some(val) => unsafe { std::env::set_var(&self.key, val) },
        None => unsafe { std::env::remove_var(&self.key) },
      }
    }
  }

  #[test]
  fn test_base_dir_override() {
    let tmp = tempdir().unwrap();
    let base = tmp.path().join("compstat-home");
    let _env = EnvVarGuard::new(BASE_DIR_ENV, base.to_str().unwrap());

    let paths = CompstatPaths::new().unwrap();

    assert_eq!(paths.base_dir, base);
    assert_eq!(paths.config_dir, base.join("config"));
    assert_eq!(paths.config_file(), base.join("config").join("compstat.toml"));

    // Discovery is read-only.
    assert!(!paths.config_dir.exists());
  }
}
