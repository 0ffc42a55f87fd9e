//! # Application State
//!
//! Shared state for the Axum application: the loaded regulation dataset
//! and the location engine over the compiled-in tables.

use std::path::PathBuf;
use std::sync::Arc;

use regmap_engine::{Dataset, LocationEngine};

const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PORT`, default 8080.
    pub port: u16,
    /// `REGMAP_DATASET`; the built-in fallback dataset when unset.
    pub dataset: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dataset: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. An unparsable `PORT`
    /// falls back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, default = DEFAULT_PORT, "invalid PORT; using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let dataset = lookup("REGMAP_DATASET")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Self { port, dataset }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub engine: LocationEngine<'static>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            engine: LocationEngine::global(),
        }
    }
}

impl Default for AppState {
    /// State over the built-in fallback dataset.
    fn default() -> Self {
        Self::new(Dataset::fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_port_and_dataset() {
        let cfg = config(&[("PORT", "9000"), ("REGMAP_DATASET", "/srv/regs.json")]);
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.dataset, Some(PathBuf::from("/srv/regs.json")));
    }

    #[test]
    fn invalid_port_and_blank_dataset_fall_back() {
        let cfg = config(&[("PORT", "eighty"), ("REGMAP_DATASET", "  ")]);
        assert_eq!(cfg, AppConfig::default());
    }
}
