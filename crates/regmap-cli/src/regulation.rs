//! # Regulation Subcommands
//!
//! - `target` - resolve a jurisdiction/country pair to its target.
//! - `search` - filter the dataset by text, location, category and status.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use regmap_core::Regulation;
use regmap_engine::RegulationFilter;

use crate::output::{regulation_lines, to_json};
use crate::Session;

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Regulation jurisdiction text (e.g. "EU", "California", "Asia-Pacific").
    pub jurisdiction: String,
    /// Regulation country text.
    #[arg(long, default_value = "")]
    pub country: String,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive text to find in title, summary, jurisdiction, country or category.
    #[arg(long, short)]
    pub query: Option<String>,
    /// Place, region bucket, or "Global". Repeatable; any may match.
    #[arg(long = "location", short)]
    pub locations: Vec<String>,
    /// Category. Repeatable; any may match.
    #[arg(long = "category")]
    pub categories: Vec<String>,
    /// Status. Repeatable; any may match.
    #[arg(long = "status")]
    pub statuses: Vec<String>,
}

impl SearchArgs {
    pub fn to_filter(&self) -> RegulationFilter {
        RegulationFilter {
            query: self.query.clone().unwrap_or_default(),
            locations: self.locations.clone(),
            categories: self.categories.clone(),
            statuses: self.statuses.clone(),
        }
    }
}

pub fn run_target(args: &TargetArgs, session: &Session) -> Result<String> {
    let regulation = Regulation::new("cli", args.jurisdiction.as_str(), args.country.as_str())?;
    let engine = &session.engine;
    let target = engine.resolve_target(&regulation);
    let scope = engine.scope_of_target(target);
    let primary = engine.primary_location(&regulation);
    let pins = engine.proposed_pins(&regulation);

    if session.is_json() {
        return to_json(&json!({
            "target": target,
            "scope": scope,
            "primary_location": primary,
            "pins": pins,
        }));
    }
    let mut out = format!("target:  {target}\nscope:   {scope}\n");
    if let Some(place) = primary {
        out.push_str(&format!("primary: {place}\n"));
    }
    let pins: Vec<&str> = pins.iter().map(|p| p.as_str()).collect();
    out.push_str(&format!("pins:    {}\n", pins.join(", ")));
    Ok(out)
}

pub fn run_search(args: &SearchArgs, session: &Session) -> Result<String> {
    let filter = args.to_filter();
    let found = session
        .engine
        .filter_regulations(&filter, session.dataset.regulations());
    tracing::info!(matches = found.len(), total = session.dataset.len(), "search complete");
    if session.is_json() {
        return to_json(&json!({ "count": found.len(), "regulations": found }));
    }
    Ok(regulation_lines(found))
}
