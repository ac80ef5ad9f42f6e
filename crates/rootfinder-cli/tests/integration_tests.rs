//! Integration tests for the rootfinder CLI
//!
//! Each test writes a corpus and an empty config file to a temporary
//! directory and runs a parsed command line end to end.

use anyhow::Result;
use clap::Parser;
use rootfinder_cli::{run, Cli, CliError};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CORPUS: &str = "\
policy_id,policy_name,year_created,year_terminated,parent_policy,policy_type,government,ideological_orientation
ARG_AGUINALDO_1945,Aguinaldo,1945,,,Labor,Perón,Populist
ARG_AGUINALDO_1995,Aguinaldo reform,1995.0,,ARG_AGUINALDO_1945,Labor,Menem,Populist
ARG_FLEX_2000,Labour flexibilisation,2000,,ARG_AGUINALDO_1995,Labor,De la Rúa,Liberal
ARG_WAGE_1950,Wage decree,1950,,ARG_AGUINALDO_1945,Economic,Perón,Populist
ARG_PLAN_2000,Short-lived plan,2000,2010,,Fiscal,De la Rúa,Liberal
";

struct Fixture {
    _dir: TempDir,
    corpus: PathBuf,
    config: PathBuf,
}

fn fixture(corpus: &str) -> Result<Fixture> {
    let dir = tempfile::tempdir()?;
    let corpus_path = dir.path().join("policies.csv");
    let config_path = dir.path().join("config.toml");
    fs::write(&corpus_path, corpus)?;
    fs::write(&config_path, "[settings]\ncolor = false\n\n[scoring]\nreference_year = 2025\n")?;

    Ok(Fixture {
        _dir: dir,
        corpus: corpus_path,
        config: config_path,
    })
}

fn run_args(fixture: &Fixture, args: &[&str]) -> rootfinder_cli::Result<String> {
    let mut argv = vec![
        "rootfinder".to_string(),
        "--corpus".to_string(),
        fixture.corpus.display().to_string(),
        "--config".to_string(),
        fixture.config.display().to_string(),
    ];
    argv.extend(args.iter().map(|a| a.to_string()));
    run(Cli::parse_from(argv))
}

#[test]
fn test_trace_json_export() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let output = run_args(&fixture, &["--format", "json", "trace", "ARG_AGUINALDO_1945"])?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["root"]["id"], "ARG_AGUINALDO_1945");
    assert_eq!(json["root"]["survival_years"], 80);
    assert_eq!(json["ancestors"].as_array().map(Vec::len), Some(0));
    assert_eq!(json["descendants"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["statistics"]["total_descendants"], 3);

    let reform = json["descendants"]
        .as_array()
        .and_then(|d| d.iter().find(|e| e["id"] == "ARG_AGUINALDO_1995"))
        .expect("reform is a descendant");
    assert!((reform["inheritance"].as_f64().unwrap_or_default() - 0.7).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_trace_table() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let output = run_args(&fixture, &["trace", "ARG_AGUINALDO_1995"])?;

    assert!(output.contains("Aguinaldo reform (ARG_AGUINALDO_1995)"));
    assert!(output.contains("Ancestors (1)"));
    assert!(output.contains("Siblings (1)"));
    assert!(output.contains("ARG_WAGE_1950"));
    Ok(())
}

#[test]
fn test_trace_unknown_policy() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let err = run_args(&fixture, &["trace", "NOPE"]).unwrap_err();

    assert!(matches!(err, CliError::Engine(_)));
    assert_eq!(err.to_string(), "Policy not found: NOPE");
    Ok(())
}

#[test]
fn test_phenotypes_threshold() -> Result<()> {
    let fixture = fixture(CORPUS)?;

    let output = run_args(&fixture, &["--format", "json", "phenotypes", "--threshold", "0.0"])?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output)?;
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["id"], "ARG_AGUINALDO_1945");

    let output = run_args(&fixture, &["--format", "json", "phenotypes", "--threshold", "1.01"])?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output)?;
    assert!(rows.is_empty());

    let output = run_args(&fixture, &["phenotypes"])?;
    assert!(output.contains("No extended phenotypes found"));
    Ok(())
}

#[test]
fn test_analyze_rows() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let output = run_args(&fixture, &["--format", "json", "analyze", "ARG_AGUINALDO_1945", "ARG_PLAN_2000"])?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output)?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["degree"], 2);
    assert_eq!(rows[0]["descendants"], 3);
    assert_eq!(rows[1]["active"], false);
    assert!((rows[1]["phenotype_score"].as_f64().unwrap_or_default() - 0.125).abs() < 1e-9);

    let all = run_args(&fixture, &["--format", "json", "analyze"])?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&all)?;
    assert_eq!(rows.len(), 5);
    Ok(())
}

#[test]
fn test_malformed_corpus() -> Result<()> {
    let corpus = format!("{}ARG_BROKEN,Broken,sometime,,,,,\n", CORPUS);
    let fixture = fixture(&corpus)?;

    let err = run_args(&fixture, &["analyze"]).unwrap_err();
    assert!(matches!(err, CliError::MalformedRecord { row: 6, .. }));

    let output = run_args(&fixture, &["--skip-malformed", "--format", "json", "analyze"])?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&output)?;
    assert_eq!(rows.len(), 5);
    Ok(())
}

#[test]
fn test_missing_corpus_file() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    fs::remove_file(&fixture.corpus)?;

    let err = run_args(&fixture, &["analyze"]).unwrap_err();
    assert!(matches!(err, CliError::Io(_)));
    Ok(())
}

#[test]
fn test_meme_compare() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let output = run_args(&fixture, &["--format", "json", "meme", "--compare"])?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["populist_advantage"], true);
    assert!(json["fitness_ratio"].as_f64().unwrap_or_default() > 1.0);
    assert_eq!(json["liberal"]["replication_fidelity"], 0.6);
    Ok(())
}

#[test]
fn test_meme_single() -> Result<()> {
    let fixture = fixture(CORPUS)?;
    let output = run_args(
        &fixture,
        &["--format", "json", "meme", "--kind", "liberal", "--fidelity", "1.0", "--days-to-benefit", "3"],
    )?;
    let json: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(json["kind"], "liberal");
    // Three days to benefit maps to 8.0
    assert_eq!(json["components"][1][1], 8.0);
    assert!((json["cultural_compatibility"].as_f64().unwrap_or_default() - 0.322).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_meme_rejects_bad_input() -> Result<()> {
    let fixture = fixture(CORPUS)?;

    let err = run_args(&fixture, &["meme", "--simplicity", "11"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)));

    let err = run_args(&fixture, &["meme", "--country", "Atlantis"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)));

    let err = run_args(&fixture, &["meme", "--fidelity", "1.5"]).unwrap_err();
    assert!(matches!(err, CliError::InvalidInput(_)));
    Ok(())
}

#[test]
fn test_config_show_and_save() -> Result<()> {
    let fixture = fixture(CORPUS)?;

    let output = run_args(&fixture, &["config"])?;
    assert!(output.contains("reference_year = 2025"));
    assert!(output.contains("[scoring.phenotype]"));

    let output = run_args(&fixture, &["config", "--save"])?;
    assert!(output.contains("Configuration saved"));
    let saved = fs::read_to_string(&fixture.config)?;
    assert!(saved.contains("[scoring.memetic.weights]"));
    Ok(())
}
