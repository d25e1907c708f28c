//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! layered over configuration files and defaults.

use clap::Parser;
use smart_city_registry::types::config::{CliArgs, ConfigError, RegistryConfig};
use smart_city_registry::types::OutputFormat;
use std::fs;
use tempfile::TempDir;

/// Test parsing with no arguments
#[test]
fn test_default_arguments() {
    let cli_args = CliArgs::try_parse_from(vec!["smart-city"]).unwrap();

    assert!(cli_args.config.is_none());
    assert!(cli_args.manifest.is_none());
    assert!(cli_args.max_facilities.is_none());
    assert!(!cli_args.verbose);
    assert!(!cli_args.debug);
    assert!(!cli_args.dry_run);
    assert!(!cli_args.print_config);

    let config = RegistryConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config, RegistryConfig::default());
}

/// Test parsing of every value flag
#[test]
fn test_value_arguments() {
    let args = vec![
        "smart-city",
        "--manifest",
        "city.json",
        "--max-facilities",
        "12",
        "--city-name",
        "Harbor Town",
        "--seed",
        "7",
        "--output-format",
        "json",
        "--verbose",
        "--dry-run",
    ];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.manifest.as_deref(), Some("city.json"));
    assert!(cli_args.verbose);
    assert!(cli_args.dry_run);

    let config = RegistryConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.max_facilities, 12);
    assert_eq!(config.city_name, "Harbor Town");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
    config.validate().unwrap();
}

/// Test that a non-numeric bound is a parse error
#[test]
fn test_invalid_max_facilities_argument() {
    assert!(CliArgs::try_parse_from(vec!["smart-city", "--max-facilities", "many"]).is_err());

    // Zero parses but fails validation
    let cli_args = CliArgs::try_parse_from(vec!["smart-city", "--max-facilities", "0"]).unwrap();
    let config = RegistryConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());
}

/// Test that an unknown output format is rejected by validation
#[test]
fn test_invalid_output_format() {
    let cli_args = CliArgs::try_parse_from(vec!["smart-city", "--output-format", "xml"]).unwrap();
    let config = RegistryConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());
}

/// Test that CLI flags override the configuration file
#[test]
fn test_config_file_with_cli_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "city_name": "File City", "max_facilities": 20, "seed": 3 }"#).unwrap();

    let args = vec![
        "smart-city",
        "--config",
        path.to_str().unwrap(),
        "--max-facilities",
        "30",
    ];
    let config = RegistryConfig::from_cli_args(CliArgs::try_parse_from(args).unwrap()).unwrap();

    assert_eq!(config.city_name, "File City");
    assert_eq!(config.max_facilities, 30);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.output_format, "text");
}

/// Test configuration save and reload
#[test]
fn test_config_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.json");

    let config = RegistryConfig { city_name: "Saved City".to_string(), seed: Some(11), ..Default::default() };
    config.save_to_file(&path).unwrap();

    let reloaded = RegistryConfig::from_file(&path).unwrap();
    assert_eq!(reloaded, config);
}

/// Test configuration file errors
#[test]
fn test_config_file_errors() {
    let dir = TempDir::new().unwrap();

    let yaml = dir.path().join("config.yaml");
    fs::write(&yaml, "city_name: Nope").unwrap();
    assert!(matches!(RegistryConfig::from_file(&yaml), Err(ConfigError::UnsupportedFormat(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(matches!(RegistryConfig::from_file(&broken), Err(ConfigError::JsonError(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(RegistryConfig::from_file(&missing), Err(ConfigError::FileNotFound(_))));
}

/// Test that the printed configuration is valid JSON for the file loader
#[test]
fn test_print_config_output_is_loadable() {
    let json = RegistryConfig::default().print_json().unwrap();
    assert!(json.contains("\"max_facilities\": 50"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("printed.json");
    fs::write(&path, json).unwrap();
    assert_eq!(RegistryConfig::from_file(&path).unwrap(), RegistryConfig::default());
}

/// Test that the park event flags are parsed and must be given together
#[test]
fn test_park_event_arguments() {
    let args = vec!["smart-city", "--event", "Summer Concert", "--visitors", "250"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.event.as_deref(), Some("Summer Concert"));
    assert_eq!(cli_args.visitors, Some(250));

    assert!(CliArgs::try_parse_from(vec!["smart-city", "--event", "Summer Concert"]).is_err());
    assert!(CliArgs::try_parse_from(vec!["smart-city", "--visitors", "250"]).is_err());
    assert!(CliArgs::try_parse_from(vec!["smart-city", "--event", "X", "--visitors", "-5"]).is_err());
}
