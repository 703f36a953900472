use std::fs;
use std::path::{Path, PathBuf};

use crate::model::FolioConfig;

pub const CONFIG_FILE: &str = "folio.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse folio.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load folio.toml from the portfolio directory. A missing file yields the
/// default config; a malformed file is a hard error so typos don't silently
/// fall back to defaults.
pub fn load_config(dir: &Path) -> Result<FolioConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(FolioConfig::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&content)?)
}
