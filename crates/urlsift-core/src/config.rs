use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::canonical_key::{KeyLimits, DEFAULT_MAX_SEGMENT_DASHES, DEFAULT_MAX_SEGMENT_LEN};

/// User configuration loaded from `~/.config/urlsift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiftConfig {
    /// Longest accepted path segment; longer segments drop the URL.
    #[serde(default = "default_max_segment_len")]
    pub max_segment_len: usize,
    /// Most `-` characters accepted in one path segment.
    #[serde(default = "default_max_segment_dashes")]
    pub max_segment_dashes: usize,
    /// Field to read URLs from when the CLI is given JSON-lines input without `--json-field`.
    #[serde(default)]
    pub json_field: Option<String>,
}

fn default_max_segment_len() -> usize {
    DEFAULT_MAX_SEGMENT_LEN
}

fn default_max_segment_dashes() -> usize {
    DEFAULT_MAX_SEGMENT_DASHES
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            max_segment_len: DEFAULT_MAX_SEGMENT_LEN,
            max_segment_dashes: DEFAULT_MAX_SEGMENT_DASHES,
            json_field: None,
        }
    }
}

impl SiftConfig {
    pub fn key_limits(&self) -> KeyLimits {
        KeyLimits {
            max_segment_len: self.max_segment_len,
            max_segment_dashes: self.max_segment_dashes,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsift")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiftConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiftConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SiftConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
