//! # Regulation Dataset
//!
//! Loads the regulation list the engine queries. Sources:
//!
//! - a JSON or YAML file holding an array of regulations, format chosen
//!   by extension (`.json`, `.yaml`, `.yml`);
//! - the compiled-in fallback dataset, used when no source is configured.
//!
//! Duplicate ids are kept (queries de-duplicate) but logged.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regmap_core::Regulation;
use thiserror::Error;

const FALLBACK_JSON: &str = include_str!("../data/fallback_regulations.json");
const FALLBACK_SOURCE: &str = "builtin:fallback";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("cannot read dataset '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in dataset '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in dataset '{origin}': {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported dataset format '{}' (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// An ordered list of regulations and where it came from.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    regulations: Vec<Regulation>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, regulations: Vec<Regulation>) -> Self {
        let dataset = Self {
            source: source.into(),
            regulations,
        };
        dataset.warn_on_duplicates();
        dataset
    }

    /// Load a dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::UnsupportedFormat`] for an unknown
    /// extension, [`DatasetError::Io`] if the file cannot be read, and
    /// [`DatasetError::Json`] / [`DatasetError::Yaml`] if it does not
    /// parse as an array of regulations.
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let origin = path.display().to_string();
        let dataset = match ext.as_str() {
            "json" => Self::parse_json(&origin, &content)?,
            _ => Self::parse_yaml(&origin, &content)?,
        };
        tracing::info!(source = %origin, regulations = dataset.len(), "loaded regulation dataset");
        Ok(dataset)
    }

    pub fn from_json_str(content: &str) -> Result<Self, DatasetError> {
        Self::parse_json("<inline>", content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, DatasetError> {
        Self::parse_yaml("<inline>", content)
    }

    /// The compiled-in dataset.
    pub fn fallback() -> Self {
        match Self::parse_json(FALLBACK_SOURCE, FALLBACK_JSON) {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::error!(error = %e, "built-in fallback dataset does not parse");
                Self::new(FALLBACK_SOURCE, Vec::new())
            }
        }
    }

    /// Load `path` if given, else the fallback dataset.
    pub fn load(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                tracing::debug!("no dataset configured; using built-in fallback");
                Ok(Self::fallback())
            }
        }
    }

    fn parse_json(origin: &str, content: &str) -> Result<Self, DatasetError> {
        let regulations = serde_json::from_str(content).map_err(|source| DatasetError::Json {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self::new(origin, regulations))
    }

    fn parse_yaml(origin: &str, content: &str) -> Result<Self, DatasetError> {
        let regulations = serde_yaml::from_str(content).map_err(|source| DatasetError::Yaml {
            origin: origin.to_string(),
            source,
        })?;
        Ok(Self::new(origin, regulations))
    }

    fn warn_on_duplicates(&self) {
        let mut seen = HashSet::new();
        for regulation in &self.regulations {
            if !seen.insert(regulation.id.as_str()) {
                tracing::warn!(
                    source = %self.source,
                    id = %regulation.id,
                    "duplicate regulation id in dataset"
                );
            }
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn regulations(&self) -> &[Regulation] {
        &self.regulations
    }

    /// First regulation with this id.
    pub fn get(&self, id: &str) -> Option<&Regulation> {
        self.regulations.iter().find(|r| r.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.regulations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regulations.is_empty()
    }
}
