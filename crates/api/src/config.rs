use serde::Deserialize;
use std::net::SocketAddr;
use validator::Validate;

use domain::models::{SecurityZone, ZoneCoordinates, ZoneType};
use domain::services::AnalyzerConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// Zones applied to frames that do not carry their own zone list.
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

/// Document store (Appwrite-compatible) connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub endpoint: String,

    pub project_id: String,

    pub api_key: String,

    #[serde(default = "default_database_id")]
    pub database_id: String,

    #[serde(default = "default_store_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// A security zone as written in configuration files.
///
/// Uses snake_case keys and converts into the camelCase wire model on load.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub zone_type: ZoneType,

    pub coordinates: ZoneCoordinates,

    #[serde(default)]
    pub cameras: Vec<String>,

    #[serde(default = "default_active_hours")]
    pub active_hours: String,

    #[serde(default = "default_zone_enabled")]
    pub enabled: bool,
}

impl ZoneConfig {
    /// Converts into the domain model, rejecting out-of-range coordinates
    /// and unparseable active hours.
    pub fn to_zone(&self) -> Result<SecurityZone, ConfigValidationError> {
        let zone = SecurityZone {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            zone_type: self.zone_type,
            coordinates: self.coordinates,
            cameras: self.cameras.clone(),
            active_hours: self.active_hours.clone(),
            enabled: self.enabled,
        };

        zone.validate().map_err(|e| {
            ConfigValidationError::InvalidValue(format!("Zone '{}' is invalid: {}", self.id, e))
        })?;

        Ok(zone)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_database_id() -> String {
    "surveillance".to_string()
}

fn default_store_timeout() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_active_hours() -> String {
    "always".to_string()
}

fn default_zone_enabled() -> bool {
    true
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with CS__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("CS").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        // Embed defaults directly to avoid file system dependency in tests
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30

            [store]
            endpoint = ""
            project_id = ""
            api_key = ""
            database_id = "surveillance"
            timeout_secs = 10

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [analyzer]
            confidence_threshold = 0.7
            loitering_threshold_secs = 30
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        // Store credentials are required
        if self.store.endpoint.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "CS__STORE__ENDPOINT environment variable must be set".to_string(),
            ));
        }

        if self.store.project_id.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "CS__STORE__PROJECT_ID environment variable must be set".to_string(),
            ));
        }

        if self.store.api_key.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "CS__STORE__API_KEY environment variable must be set".to_string(),
            ));
        }

        // Validate port range
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        // Configured zones must convert into valid domain zones
        self.default_zones()?;

        Ok(())
    }

    /// Zones applied when an analysis request does not carry its own.
    pub fn default_zones(&self) -> Result<Vec<SecurityZone>, ConfigValidationError> {
        self.zones.iter().map(ZoneConfig::to_zone).collect()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .expect("Invalid socket address")
    }
}
