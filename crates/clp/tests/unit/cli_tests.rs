//! Terminal command tests

use std::io::Write;

use clap::Parser;
use clp::cli::{Cli, Command, ExplainArgs, explain, read_source};

fn offline(language: &str, json: bool) -> ExplainArgs {
    ExplainArgs {
        language: language.to_string(),
        offline: true,
        json,
        file: None,
    }
}

fn missing_config() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn test_parse_defaults_to_serve() {
    let cli = Cli::parse_from(["clp"]);
    assert!(cli.command.is_none());

    let cli = Cli::parse_from(["clp", "serve", "--config", "custom.toml"]);
    assert!(matches!(cli.command, Some(Command::Serve)));
    assert_eq!(cli.config.unwrap().to_str(), Some("custom.toml"));
}

#[test]
fn test_parse_explain() {
    let cli = Cli::parse_from(["clp", "explain", "-l", "python", "--offline", "--json", "a.py"]);
    match cli.command {
        Some(Command::Explain(args)) => {
            assert_eq!(args.language, "python");
            assert!(args.offline);
            assert!(args.json);
            assert_eq!(args.file.unwrap().to_str(), Some("a.py"));
        }
        other => panic!("Expected explain, got {other:?}"),
    }
}

#[test]
fn test_explain_requires_language() {
    assert!(Cli::try_parse_from(["clp", "explain", "a.py"]).is_err());
}

#[test]
fn test_read_source_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "print('hi')").unwrap();
    assert_eq!(read_source(Some(file.path())).unwrap(), "print('hi')");
}

#[test]
fn test_read_source_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_source(Some(dir.path().join("absent.py").as_path())).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[tokio::test]
async fn test_explain_offline_markdown() {
    let dir = missing_config();
    let config = dir.path().join("clp.toml");
    let output = explain(
        Some(config.as_path()),
        &offline("python", false),
        "x = 5\nprint(x)".to_string(),
    )
    .await
    .unwrap();

    assert!(output.starts_with("# Python Code Explanation"));
    assert!(output.contains("## Step-by-Step Explanation"));
}

#[tokio::test]
async fn test_explain_offline_json() {
    let dir = missing_config();
    let config = dir.path().join("clp.toml");
    let output = explain(
        Some(config.as_path()),
        &offline("c", true),
        "int x = 5;".to_string(),
    )
    .await
    .unwrap();

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["language"], "C");
    assert_eq!(json["source"], "local-pattern-analysis");
    assert_eq!(json["code"], "int x = 5;");
}

#[tokio::test]
async fn test_explain_reports_validation_messages() {
    let dir = missing_config();
    let config = dir.path().join("clp.toml");

    let err = explain(Some(config.as_path()), &offline("ruby", false), "puts 1".to_string())
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Only C, Python"));

    let err = explain(Some(config.as_path()), &offline("python", false), "  ".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Code is required");
}
