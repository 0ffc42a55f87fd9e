//! # Output Formatting
//!
//! Every command renders either human-readable text or pretty JSON.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use regmap_core::Regulation;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}

/// One line per regulation: id, jurisdiction/country, title.
pub fn regulation_lines<'a>(regulations: impl IntoIterator<Item = &'a Regulation>) -> String {
    let mut out = String::new();
    for regulation in regulations {
        let location = match regulation.country.trim() {
            "" => regulation.jurisdiction.clone(),
            country => format!("{} / {}", regulation.jurisdiction, country),
        };
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            regulation.id,
            location,
            regulation.title.as_deref().unwrap_or("")
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulation_lines_format() {
        let regs = [
            Regulation::new("a", "EU", "").unwrap().with_title("CSRD"),
            Regulation::new("b", "California", "United States").unwrap(),
        ];
        assert_eq!(
            regulation_lines(&regs),
            "a\tEU\tCSRD\nb\tCalifornia / United States\t\n"
        );
    }

    #[test]
    fn json_is_pretty() {
        assert_eq!(to_json(&["x"]).unwrap(), "[\n  \"x\"\n]");
    }
}
