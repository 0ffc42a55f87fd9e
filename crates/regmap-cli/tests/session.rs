//! Session setup from config files and flags.

use std::path::Path;

use regmap_cli::config::CliConfig;
use regmap_cli::output::OutputFormat;
use regmap_cli::place::{run_place, PlaceArgs};
use regmap_cli::Session;

fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults_to_fallback_dataset_and_text() {
    let session = Session::open(&CliConfig::default(), None, false).unwrap();
    assert_eq!(session.format, OutputFormat::Text);
    assert!(session.dataset.get("eu-csrd").is_some());
}

#[test]
fn config_supplies_dataset_and_format() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "regs.yaml",
        "- id: tx-1\n  jurisdiction: Texas\n  country: United States\n",
    );
    let config_path = write(dir.path(), "regmap.yaml", "dataset: regs.yaml\noutput: json\n");

    let config = CliConfig::load(&config_path).unwrap();
    let session = Session::open(&config, None, false).unwrap();
    assert_eq!(session.format, OutputFormat::Json);
    assert_eq!(session.dataset.len(), 1);
    assert!(session.dataset.get("tx-1").is_some());
}

#[test]
fn flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.json", r#"[{"id":"a","jurisdiction":"Japan"}]"#);
    let b = write(dir.path(), "b.json", r#"[{"id":"b","jurisdiction":"France"}]"#);
    let config_path = write(dir.path(), "regmap.yaml", "dataset: a.json\noutput: text\n");

    let config = CliConfig::load(&config_path).unwrap();
    let session = Session::open(&config, Some(b.as_path()), true).unwrap();
    assert_eq!(session.format, OutputFormat::Json);
    assert!(session.dataset.get("b").is_some());
    assert!(session.dataset.get("a").is_none());
}

#[test]
fn missing_dataset_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::open(&CliConfig::default(), Some(dir.path().join("none.json").as_path()), false)
        .unwrap_err();
    assert!(format!("{err:#}").contains("loading regulation dataset"));
}

#[test]
fn place_query_over_custom_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "regs.json",
        r#"[
            {"id":"fed","jurisdiction":"US","country":"United States","title":"Federal"},
            {"id":"tx","jurisdiction":"Texas","country":"United States","title":"State"},
            {"id":"ny","jurisdiction":"New York","country":"United States","title":"Other state"}
        ]"#,
    );
    let session = Session::open(&CliConfig::default(), Some(path.as_path()), false).unwrap();
    let out = run_place(&PlaceArgs { place: "Texas".into() }, &session).unwrap();
    assert_eq!(
        out,
        "fed\tUS / United States\tFederal\ntx\tTexas / United States\tState\n"
    );
}
