//! Tests for CLI output helpers and non-search commands
//!
//! - show-config report in both formats
//! - Shell completion generation

use clap::CommandFactory;
use clap_complete::Shell;
use docsearch::cli::commands::completions::write_completions;
use docsearch::cli::commands::config::{self, ConfigArgs};
use docsearch::cli::{Cli, OutputFormat};
use docsearch::core::config::Config;

fn render_config(config: &Config, format: OutputFormat) -> String {
    let mut out = Vec::new();
    config::run(&ConfigArgs::default(), config, &mut out, format).expect("Config should render");
    String::from_utf8(out).expect("Output should be UTF-8")
}

#[test]
fn test_config_human_output() {
    let out = render_config(&Config::default(), OutputFormat::Human);
    assert!(out.contains("max_results: 5"));
    assert!(out.contains("minus_marker: -"));
    assert!(!out.contains("config_file"));
}

#[test]
fn test_config_json_output() {
    let mut config = Config::default();
    config.search.max_results = 9;

    let out = render_config(&config, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&out).expect("Valid JSON");
    assert_eq!(value["search"]["max_results"], 9);
    assert_eq!(value["search"]["minus_marker"], "-");
    assert!(value.get("config_file").is_none());
}

#[test]
fn test_completions_bash() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out).expect("Completions should generate");
    let script = String::from_utf8(out).expect("Output should be UTF-8");
    assert!(script.contains("docsearch"));
    assert!(script.contains("match-document"));
}

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}
