//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override what is loaded here.

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines; failures go to stderr.
    #[default]
    Text,
    /// One JSON object on stdout, success or failure.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// CLI configuration.
#[derive(Debug)]
pub struct CliConfig {
    /// tracing filter, parsed from `FASTFOOD_LOG`
    pub log_filter: EnvFilter,

    /// Report format (`--format`, else `FASTFOOD_OUTPUT`)
    pub output: OutputFormat,

    /// Symbol prefixed to totals in text mode (`FASTFOOD_CURRENCY`)
    pub currency: String,
}

const DEFAULT_LOG_FILTER: &str = "warn";

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// A format given on the command line wins, and `FASTFOOD_OUTPUT` is
    /// then not read at all.
    pub fn load(output_flag: Option<OutputFormat>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok(), output_flag)
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        output_flag: Option<OutputFormat>,
    ) -> Result<Self, ConfigError> {
        let raw_filter = lookup("FASTFOOD_LOG");
        let log_filter = EnvFilter::try_new(raw_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER))
            .map_err(|_| ConfigError::InvalidValue("FASTFOOD_LOG".to_string()))?;

        let output = match (output_flag, lookup("FASTFOOD_OUTPUT")) {
            (Some(flag), _) => flag,
            (None, Some(raw)) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FASTFOOD_OUTPUT".to_string()))?,
            (None, None) => OutputFormat::default(),
        };

        let currency = lookup("FASTFOOD_CURRENCY").unwrap_or_default();

        Ok(CliConfig {
            log_filter,
            output,
            currency,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tracing_subscriber::filter::LevelFilter;

    fn load_with(
        vars: &[(&str, &str)],
        output_flag: Option<OutputFormat>,
    ) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned(), output_flag)
    }

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        load_with(vars, None)
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.log_filter.max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.currency, "");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FASTFOOD_LOG", "fastfood_core=debug"),
            ("FASTFOOD_OUTPUT", "JSON"),
            ("FASTFOOD_CURRENCY", "€"),
        ])
        .unwrap();
        assert_eq!(config.log_filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn test_invalid_output() {
        let err = load(&[("FASTFOOD_OUTPUT", "yaml")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FASTFOOD_OUTPUT");
    }

    #[test]
    fn test_output_flag_wins_over_env() {
        let config = load_with(&[("FASTFOOD_OUTPUT", "json")], Some(OutputFormat::Text)).unwrap();
        assert_eq!(config.output, OutputFormat::Text);

        // The env value is never parsed when the flag is set.
        let config = load_with(&[("FASTFOOD_OUTPUT", "yaml")], Some(OutputFormat::Json)).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_log_filter() {
        let err = load(&[("FASTFOOD_LOG", "fastfood_core=loud")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for FASTFOOD_LOG");
    }
}
