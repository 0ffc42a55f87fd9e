//! # Place Subcommands
//!
//! - `ancestors` - ancestor chain, nearest first, ending in `Global`.
//! - `place` - regulations applying to a place or region bucket.
//! - `applies` - does a jurisdiction/country pair apply to a place.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use regmap_core::Regulation;
use regmap_engine::PlaceQuery;
use regmap_geo::Ancestor;

use crate::output::{regulation_lines, to_json};
use crate::Session;

#[derive(Args, Debug)]
pub struct AncestorsArgs {
    /// Place name or alias (e.g. "California", "Czechia").
    pub place: String,
}

#[derive(Args, Debug)]
pub struct PlaceArgs {
    /// Place name, alias, or region bucket (e.g. "Europe").
    pub place: String,
}

#[derive(Args, Debug)]
pub struct AppliesArgs {
    /// Place name, alias, or region bucket.
    pub place: String,
    /// Regulation jurisdiction text.
    #[arg(long)]
    pub jurisdiction: String,
    /// Regulation country text.
    #[arg(long, default_value = "")]
    pub country: String,
}

pub fn run_ancestors(args: &AncestorsArgs, session: &Session) -> Result<String> {
    let chain: Vec<&str> = session
        .engine
        .hierarchy()
        .ancestors_of(&args.place)
        .iter()
        .map(Ancestor::name)
        .collect();
    if session.is_json() {
        return to_json(&json!({ "place": args.place, "ancestors": chain }));
    }
    Ok(format!("{}\n", chain.join(" > ")))
}

pub fn run_place(args: &PlaceArgs, session: &Session) -> Result<String> {
    let query = PlaceQuery::parse(&args.place);
    if let PlaceQuery::Unknown(text) = &query {
        tracing::warn!(place = %text, "not a known place or region; only global regulations apply");
    }
    let found = session
        .engine
        .regulations_matching(&query, session.dataset.regulations());
    if session.is_json() {
        return to_json(&json!({ "query": query, "count": found.len(), "regulations": found }));
    }
    Ok(regulation_lines(found))
}

pub fn run_applies(args: &AppliesArgs, session: &Session) -> Result<String> {
    let regulation = Regulation::new("cli", args.jurisdiction.as_str(), args.country.as_str())?;
    let target = session.engine.resolve_target(&regulation);
    let applies = session.engine.applies_to_place(&regulation, &args.place);
    if session.is_json() {
        return to_json(&json!({ "place": args.place, "target": target, "applies": applies }));
    }
    Ok(format!(
        "{} ({target} -> {})\n",
        if applies { "yes" } else { "no" },
        args.place
    ))
}
