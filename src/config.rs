use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG: &str = "vantage.toml";

/// Top-level Vantage configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VantageConfig {
    /// RNG seed for vantage point selection. Unset = OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Tree construction settings.
    #[serde(default)]
    pub tree: TreeToml,

    /// Query settings.
    #[serde(default)]
    pub search: SearchToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeToml {
    #[serde(default)]
    pub bucket_size: usize,
    #[serde(default = "default_metric")]
    pub metric: String,
}

impl Default for TreeToml {
    fn default() -> Self {
        Self {
            bucket_size: 0,
            metric: default_metric(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub max_distance: Option<f64>,
}

impl Default for SearchToml {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            max_distance: None,
        }
    }
}

fn default_metric() -> String {
    "euclidean".to_string()
}
fn default_limit() -> usize {
    10
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG`] is read if
/// present and built-in defaults are used otherwise.
pub fn load(path: Option<&Path>) -> Result<VantageConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_CONFIG);
            if !fallback.exists() {
                debug!("no config file, using defaults");
                return Ok(VantageConfig::default());
            }
            fallback
        }
    };
    let toml_str = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: VantageConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}
