//! Configuration structures for the facility registry
//!
//! This module contains the registry configuration, its command line and file
//! sources, and the validation logic applied before a registry is built.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default upper bound on the number of facilities in one registry
pub const DEFAULT_MAX_FACILITIES: usize = 50;

/// Default city name shown in reports
pub const DEFAULT_CITY_NAME: &str = "Smart Metro City";

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smart-city",
    version = "0.1.0",
    about = "Smart City Registry - Loads city facilities and reports on them",
    long_about = "Builds an in-memory registry of city facilities (hospitals, schools, offices, parks) from a JSON manifest and reports statistics, maintenance costs and accessibility compliance.

EXAMPLES:
    # Load a manifest and print the text report
    smart-city --manifest city.json

    # Use a configuration file
    smart-city --config config.json --manifest city.json

    # JSON output with a smaller registry bound
    smart-city --manifest city.json --max-facilities 10 --output-format json

    # Ask every park whether it can host an event
    smart-city --manifest city.json --event \"Summer Concert\" --visitors 250

    # Generate configuration template
    smart-city --print-config > my-config.json

    # Validate configuration without loading anything
    smart-city --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Facility manifest to load into the registry
    #[arg(short, long, help = "Facility manifest path (JSON format)")]
    pub manifest: Option<String>,

    /// Maximum number of facilities the registry accepts
    #[arg(
        long,
        help = "Maximum number of facilities",
        long_help = "Upper bound on the number of facilities in the registry. Must be greater than 0. Default: 50"
    )]
    pub max_facilities: Option<usize>,

    /// City name used in report headers
    #[arg(long, help = "City name used in reports")]
    pub city_name: Option<String>,

    /// Random seed for reproducible credential numbers
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output format for reports
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for reports. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Event every park is asked to host
    #[arg(long, requires = "visitors", help = "Ask every park to host this event")]
    pub event: Option<String>,

    /// Visitors expected at the event
    #[arg(long, requires = "event", help = "Expected visitors for --event")]
    pub visitors: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without building a registry
    #[arg(long, help = "Validate configuration without loading facilities")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// City name used in reports
    pub city_name: Option<String>,

    /// Maximum number of facilities the registry accepts
    pub max_facilities: Option<usize>,

    /// Random seed for reproducible credential numbers
    pub seed: Option<u64>,

    /// Output format for reports
    pub output_format: Option<String>,
}

/// Configuration for a facility registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistryConfig {
    /// City name used in reports
    pub city_name: String,

    /// Maximum number of facilities the registry accepts
    pub max_facilities: usize,

    /// Random seed for reproducible credential numbers
    pub seed: Option<u64>,

    /// Output format for reports
    pub output_format: String,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for registry configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Registry bound is invalid
    #[error("Maximum facilities must be greater than 0, got {0}")]
    InvalidMaxFacilities(usize),

    /// City name is empty
    #[error("City name must not be empty")]
    EmptyCityName,

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            city_name: DEFAULT_CITY_NAME.to_string(),
            max_facilities: DEFAULT_MAX_FACILITIES,
            seed: None,
            output_format: "text".to_string(),
        }
    }
}

impl RegistryConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            city_name: config_file.city_name.unwrap_or(defaults.city_name),
            max_facilities: config_file.max_facilities.unwrap_or(defaults.max_facilities),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.city_name {
            config.city_name = value;
        }
        if let Some(value) = args.max_facilities {
            config.max_facilities = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.max_facilities == 0 {
            return Err(ConfigValidationError::InvalidMaxFacilities(self.max_facilities));
        }

        if self.city_name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCityName);
        }

        self.get_output_format()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> CliArgs {
        CliArgs::try_parse_from(["smart-city"]).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.city_name, "Smart Metro City");
        assert_eq!(config.max_facilities, 50);
        assert!(config.seed.is_none());
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_bound() {
        let config = RegistryConfig { max_facilities: 0, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxFacilities(0))
        ));
    }

    #[test]
    fn test_validation_rejects_blank_city_and_bad_format() {
        let config = RegistryConfig { city_name: "   ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyCityName)));

        let config = RegistryConfig { output_format: "yaml".to_string(), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidOutputFormat(_))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = bare_args();
        args.max_facilities = Some(5);
        args.seed = Some(9);
        args.output_format = Some("json".to_string());

        let config = RegistryConfig::from_cli_args(args).unwrap();
        assert_eq!(config.max_facilities, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Json);
        assert_eq!(config.city_name, DEFAULT_CITY_NAME);
    }

    #[test]
    fn test_partial_config_file_merges_defaults() {
        let file: ConfigFile = serde_json::from_str(r#"{"max_facilities": 12}"#).unwrap();
        let config = RegistryConfig::from_config_file(file);
        assert_eq!(config.max_facilities, 12);
        assert_eq!(config.city_name, DEFAULT_CITY_NAME);
        assert_eq!(config.output_format, "text");
    }

    #[test]
    fn test_missing_file() {
        let result = RegistryConfig::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
