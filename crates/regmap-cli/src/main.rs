//! # regmap CLI entry point
//!
//! Parses command-line arguments, builds a [`Session`] and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regmap_cli::config::CliConfig;
use regmap_cli::map::{run_pins, run_scopes};
use regmap_cli::place::{run_ancestors, run_applies, run_place, AncestorsArgs, AppliesArgs, PlaceArgs};
use regmap_cli::regulation::{run_search, run_target, SearchArgs, TargetArgs};
use regmap_cli::Session;

/// Query where sustainability regulations apply.
#[derive(Parser, Debug)]
#[command(name = "regmap", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Regulation dataset (JSON or YAML). Defaults to the built-in dataset.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ancestor chain of a place, nearest first.
    Ancestors(AncestorsArgs),

    /// Resolve a jurisdiction/country pair to its target, scope and pins.
    Target(TargetArgs),

    /// Check whether a jurisdiction/country pair applies to a place.
    Applies(AppliesArgs),

    /// Regulations applying to a place or region bucket.
    Place(PlaceArgs),

    /// Regulations grouped by scope level.
    Scopes,

    /// Map pins and the regulations each lists.
    Pins,

    /// Filter regulations by text, location, category and status.
    Search(SearchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = CliConfig::load_optional(cli.config.as_deref())?;
    let session = Session::open(&config, cli.dataset.as_deref(), cli.json)?;

    match &cli.command {
        Commands::Ancestors(args) => run_ancestors(args, &session),
        Commands::Target(args) => run_target(args, &session),
        Commands::Applies(args) => run_applies(args, &session),
        Commands::Place(args) => run_place(args, &session),
        Commands::Scopes => run_scopes(&session),
        Commands::Pins => run_pins(&session),
        Commands::Search(args) => run_search(args, &session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_ancestors() {
        let cli = Cli::try_parse_from(["regmap", "ancestors", "California"]).unwrap();
        if let Commands::Ancestors(args) = cli.command {
            assert_eq!(args.place, "California");
        } else {
            panic!("expected ancestors");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["regmap", "pins", "--json", "-vv", "--dataset", "r.yaml"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dataset, Some(PathBuf::from("r.yaml")));
        assert!(matches!(cli.command, Commands::Pins));
    }

    #[test]
    fn cli_parse_target_with_country() {
        let cli = Cli::try_parse_from(["regmap", "target", "EU", "--country", "France"]).unwrap();
        if let Commands::Target(args) = cli.command {
            assert_eq!(args.jurisdiction, "EU");
            assert_eq!(args.country, "France");
        } else {
            panic!("expected target");
        }
    }

    #[test]
    fn cli_parse_applies_requires_jurisdiction() {
        assert!(Cli::try_parse_from(["regmap", "applies", "Texas"]).is_err());
        let cli = Cli::try_parse_from(["regmap", "applies", "Texas", "--jurisdiction", "US"]).unwrap();
        if let Commands::Applies(args) = cli.command {
            assert_eq!(args.country, "");
        }
    }

    #[test]
    fn cli_parse_search_repeatable_facets() {
        let cli = Cli::try_parse_from([
            "regmap",
            "search",
            "-q",
            "climate",
            "--location",
            "EU",
            "-l",
            "Japan",
            "--category",
            "Disclosure",
        ])
        .unwrap();
        if let Commands::Search(args) = cli.command {
            assert_eq!(args.query.as_deref(), Some("climate"));
            assert_eq!(args.locations, ["EU", "Japan"]);
            assert_eq!(args.categories, ["Disclosure"]);
            assert!(args.statuses.is_empty());
        } else {
            panic!("expected search");
        }
    }
}
