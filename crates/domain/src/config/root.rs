use serde::{Deserialize, Serialize};

use super::access_log::{AccessLogConfig, AccessLogFormat, SinkKind};
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dns-access-log.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-access-log/config.toml";

/// Main configuration structure for the DNS access log
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Process diagnostics
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Access log format and destination
    #[serde(default)]
    pub access_log: AccessLogConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-access-log.toml in current directory
    /// 3. /etc/dns-access-log/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides)?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(format) = overrides.format {
            self.access_log.format = format
                .parse::<AccessLogFormat>()
                .map_err(|e| ConfigError::InvalidOverride("format", e))?;
        }
        if let Some(path) = overrides.output {
            self.access_log.sink = SinkKind::File;
            self.access_log.path = Some(path);
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let access_log = &self.access_log;

        match access_log.format {
            AccessLogFormat::Text if access_log.text_format.trim().is_empty() => {
                return Err(ConfigError::Validation(
                    "Text access log format cannot be empty".to_string(),
                ));
            }
            AccessLogFormat::Json if access_log.json_format.is_empty() => {
                return Err(ConfigError::Validation(
                    "JSON access log format needs at least one field".to_string(),
                ));
            }
            _ => {}
        }

        if access_log.sink == SinkKind::File
            && access_log.path.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::Validation(
                "File sink requires access_log.path".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub format: Option<String>,
    /// Switches the sink to a file at this path.
    pub output: Option<String>,
}
