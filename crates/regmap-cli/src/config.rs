//! # CLI Configuration File
//!
//! Optional YAML file passed with `--config`:
//!
//! ```yaml
//! dataset: data/regulations.yaml
//! output: json
//! ```
//!
//! Command-line flags override file values. A relative `dataset` path is
//! resolved against the directory containing the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::output::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let mut config: CliConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        if let (Some(dataset), Some(dir)) = (&config.dataset, path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }
        tracing::debug!(config = %path.display(), "loaded CLI config");
        Ok(config)
    }

    /// Load `path` if given, else the empty config.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map(Self::load).transpose().map(Option::unwrap_or_default)
    }
}
