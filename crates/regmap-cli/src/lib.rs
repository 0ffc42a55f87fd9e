//! # regmap-cli: Regulation Map CLI
//!
//! Provides the `regmap` command-line interface over the location engine.
//!
//! ## Subcommands
//!
//! - `regmap ancestors <place>` - ancestor chain of a place.
//! - `regmap place <place>` - regulations applying to a place or region.
//! - `regmap applies <place> --jurisdiction J [--country C]` - one applicability check.
//! - `regmap target <jurisdiction> [--country C]` - resolved target and scope.
//! - `regmap search [--query Q] [--location L]..` - filtered regulation list.
//! - `regmap scopes` / `regmap pins` - scope groups and map pins.
//!
//! ```bash
//! regmap --dataset regs.yaml place California
//! regmap --json target EU --country France
//! ```
//!
//! Handlers return the rendered output; `main` prints it.

pub mod config;
pub mod map;
pub mod output;
pub mod place;
pub mod regulation;

use std::path::Path;

use anyhow::{Context, Result};
use regmap_engine::{Dataset, LocationEngine};

use crate::config::CliConfig;
use crate::output::OutputFormat;

/// Everything a command handler needs: the dataset, the engine and the
/// requested output format.
#[derive(Debug)]
pub struct Session {
    pub dataset: Dataset,
    pub engine: LocationEngine<'static>,
    pub format: OutputFormat,
}

impl Session {
    pub fn new(dataset: Dataset, format: OutputFormat) -> Self {
        Self {
            dataset,
            engine: LocationEngine::global(),
            format,
        }
    }

    /// Resolve flags against the config file and load the dataset.
    ///
    /// `--dataset` beats the config's `dataset`; `--json` beats its
    /// `output`. With neither, the built-in fallback dataset and text
    /// output are used.
    pub fn open(config: &CliConfig, dataset_flag: Option<&Path>, json: bool) -> Result<Self> {
        let dataset_path = dataset_flag.or(config.dataset.as_deref());
        let dataset = Dataset::load(dataset_path).context("loading regulation dataset")?;
        let format = if json {
            OutputFormat::Json
        } else {
            config.output.unwrap_or_default()
        };
        tracing::debug!(source = dataset.source(), regulations = dataset.len(), ?format, "session ready");
        Ok(Self::new(dataset, format))
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
