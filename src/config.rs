//! Configuration management for the `TripAI` backend
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TripAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Root configuration structure for the `TripAI` backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TripAiConfig {
    /// Generative model API configuration
    #[serde(default)]
    pub gemini: GeminiConfig,
    /// Address autocomplete provider configuration
    #[serde(default)]
    pub maps: MapsConfig,
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Trace export configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Generative model API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key, resolved at call time; absence is reported per request
    pub api_key: Option<String>,
    /// Base URL for the generation API
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Model used for the full trip plan
    #[serde(default = "default_plan_model")]
    pub plan_model: String,
    /// Sampling temperature for the full trip plan
    #[serde(default = "default_plan_temperature")]
    pub plan_temperature: f32,
    /// Model used for the live weather overlay
    #[serde(default = "default_weather_model")]
    pub weather_model: String,
    /// Sampling temperature for the live weather overlay
    #[serde(default = "default_weather_temperature")]
    pub weather_temperature: f32,
    /// Request timeout in seconds
    #[serde(default = "default_gemini_timeout")]
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    #[serde(default)]
    pub max_retries: u32,
}

/// Places autocomplete configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Places API key
    pub api_key: Option<String>,
    /// Base URL for the Places web service
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_maps_timeout")]
    pub timeout_seconds: u32,
    /// Debounce delay applied to keystroke-driven lookups
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// HTTP server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// Directory with the built browser UI
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Upper bound for a whole request, generation included
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Maximum accepted request body size in KB
    #[serde(default = "default_body_limit")]
    pub body_limit_kb: u32,
    /// PEM certificate chain, enables TLS together with `tls_key`
    pub tls_cert: Option<String>,
    /// PEM private key
    pub tls_key: Option<String>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// OpenTelemetry export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// OTLP/HTTP traces endpoint; export is disabled when unset
    pub otlp_endpoint: Option<String>,
}

// Default value functions
fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_plan_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_plan_temperature() -> f32 {
    0.7
}

fn default_weather_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_weather_temperature() -> f32 {
    0.2
}

fn default_gemini_timeout() -> u32 {
    60
}

fn default_maps_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_maps_timeout() -> u32 {
    10
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_request_timeout() -> u32 {
    180
}

fn default_body_limit() -> u32 {
    512
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_gemini_base_url(),
            plan_model: default_plan_model(),
            plan_temperature: default_plan_temperature(),
            weather_model: default_weather_model(),
            weather_temperature: default_weather_temperature(),
            timeout_seconds: default_gemini_timeout(),
            max_retries: 0,
        }
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_maps_base_url(),
            timeout_seconds: default_maps_timeout(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            static_dir: default_static_dir(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_kb: default_body_limit(),
            tls_cert: None,
            tls_key: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(env::var_os("TRIPAI_CONFIG").map(PathBuf::from))
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRIPAI__GEMINI__API_KEY style overrides
        builder = builder.add_source(
            Environment::with_prefix("TRIPAI")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TripAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_env_fallbacks();
        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripai").join("config.toml"))
    }

    /// Pick up the conventional provider key variables when no key was configured
    pub fn apply_env_fallbacks(&mut self) {
        if self.gemini.api_key.is_none() {
            self.gemini.api_key = env::var("GEMINI_API_KEY").ok();
        }
        if self.maps.api_key.is_none() {
            self.maps.api_key = env::var("GOOGLE_MAPS_API_KEY").ok();
        }
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.gemini.base_url.is_empty() {
            self.gemini.base_url = default_gemini_base_url();
        }
        if self.gemini.plan_model.is_empty() {
            self.gemini.plan_model = default_plan_model();
        }
        if self.gemini.weather_model.is_empty() {
            self.gemini.weather_model = default_weather_model();
        }
        if self.gemini.timeout_seconds == 0 {
            self.gemini.timeout_seconds = default_gemini_timeout();
        }
        if self.maps.base_url.is_empty() {
            self.maps.base_url = default_maps_base_url();
        }
        if self.maps.timeout_seconds == 0 {
            self.maps.timeout_seconds = default_maps_timeout();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.server.request_timeout_seconds == 0 {
            self.server.request_timeout_seconds = default_request_timeout();
        }
        if self.server.body_limit_kb == 0 {
            self.server.body_limit_kb = default_body_limit();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.gemini.timeout_seconds > 300 {
            return Err(TripAiError::config("Gemini API timeout cannot exceed 300 seconds").into());
        }

        if self.gemini.max_retries > 10 {
            return Err(TripAiError::config("Gemini API max retries cannot exceed 10").into());
        }

        for (name, value) in [
            ("plan_temperature", self.gemini.plan_temperature),
            ("weather_temperature", self.gemini.weather_temperature),
        ] {
            if !(0.0..=2.0).contains(&value) {
                return Err(TripAiError::config(format!(
                    "Gemini {name} must be between 0.0 and 2.0, got {value}"
                ))
                .into());
            }
        }

        if self.maps.timeout_seconds > 60 {
            return Err(TripAiError::config("Maps API timeout cannot exceed 60 seconds").into());
        }

        if self.maps.debounce_ms > 5_000 {
            return Err(TripAiError::config("Autocomplete debounce cannot exceed 5000 ms").into());
        }

        if u64::from(self.server.request_timeout_seconds) < self.plan_time_budget_seconds() {
            return Err(TripAiError::config(format!(
                "Server request timeout must cover both Gemini calls with retries ({} seconds)",
                self.plan_time_budget_seconds()
            ))
            .into());
        }

        Ok(())
    }

    /// Worst case for one plan: primary and live weather calls, each with retries
    #[must_use]
    pub fn plan_time_budget_seconds(&self) -> u64 {
        u64::from(self.gemini.timeout_seconds) * (u64::from(self.gemini.max_retries) + 1) * 2
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Gemini API base URL", &self.gemini.base_url),
            ("Maps API base URL", &self.maps.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(
                    TripAiError::config(format!("{name} must be a valid HTTP or HTTPS URL")).into(),
                );
            }
        }

        if self.server.tls_cert.is_some() != self.server.tls_key.is_some() {
            return Err(TripAiError::config(
                "TLS requires both server.tls_cert and server.tls_key",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TripAiConfig::default();
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.gemini.plan_model, "gemini-2.5-pro");
        assert_eq!(config.gemini.weather_model, "gemini-2.5-flash");
        assert_eq!(config.gemini.timeout_seconds, 60);
        assert_eq!(config.gemini.max_retries, 0);
        assert_eq!(config.maps.debounce_ms, 300);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert!(config.gemini.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_api_key_is_not_a_load_error() {
        let mut config = TripAiConfig::default();
        config.gemini.api_key = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TripAiConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TripAiConfig::default();
        config.gemini.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_server_timeout_covers_both_calls_with_retries() {
        let mut config = TripAiConfig::default();
        assert_eq!(config.plan_time_budget_seconds(), 120);
        assert!(config.validate().is_ok());

        config.gemini.max_retries = 1;
        assert_eq!(config.plan_time_budget_seconds(), 240);
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("240 seconds"));

        config.server.request_timeout_seconds = 240;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_temperature_range() {
        let mut config = TripAiConfig::default();
        config.gemini.weather_temperature = 3.5;
        let result = config.validate();
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("weather_temperature")
        );
    }

    #[test]
    fn test_config_validation_half_tls() {
        let mut config = TripAiConfig::default();
        config.server.tls_cert = Some("cert.pem".to_string());
        let result = config.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = TripAiConfig::default();
        config.gemini.plan_model.clear();
        config.gemini.timeout_seconds = 0;
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.gemini.plan_model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_seconds, 60);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[gemini]
api_key = "file_key_123"
max_retries = 2
timeout_seconds = 30

[server]
port = 9090
"#
        )
        .unwrap();

        let config = TripAiConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("file_key_123"));
        assert_eq!(config.gemini.max_retries, 2);
        assert_eq!(config.gemini.timeout_seconds, 30);
        assert_eq!(config.server.port, 9090);
        // untouched sections keep their defaults
        assert_eq!(config.gemini.plan_model, "gemini-2.5-pro");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_path_generation() {
        let path = TripAiConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("tripai"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
