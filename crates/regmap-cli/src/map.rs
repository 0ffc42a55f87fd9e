//! # Map Subcommands
//!
//! - `scopes` - dataset grouped by scope level.
//! - `pins` - map pins with the regulations each lists.

use anyhow::Result;
use regmap_core::ScopeLevel;

use crate::output::to_json;
use crate::Session;

pub fn run_scopes(session: &Session) -> Result<String> {
    let groups = session.engine.group_by_scope(session.dataset.regulations());
    if session.is_json() {
        return to_json(&groups);
    }
    let mut out = String::new();
    for level in ScopeLevel::all() {
        let bucket = groups.bucket(*level);
        let ids: Vec<&str> = bucket.iter().map(|r| r.id.as_str()).collect();
        out.push_str(&format!("{level} ({}): {}\n", bucket.len(), ids.join(", ")));
    }
    Ok(out)
}

pub fn run_pins(session: &Session) -> Result<String> {
    let pins = session.engine.pins(session.dataset.regulations());
    if session.is_json() {
        return to_json(&pins);
    }
    let mut out = String::new();
    for pin in &pins {
        let ids: Vec<&str> = pin.regulation_ids.iter().map(|id| id.as_str()).collect();
        out.push_str(&format!(
            "{} [{:.2}, {:.2}] {}: {}\n",
            pin.display_name,
            pin.coordinate.lat,
            pin.coordinate.lng,
            pin.level,
            ids.join(", ")
        ));
    }
    Ok(out)
}
