use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default Open-Meteo geocoding search endpoint.
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_GEOCODING_URL: &str = "OPENMETEO_GEOCODING_URL";
pub const ENV_FORECAST_URL: &str = "OPENMETEO_FORECAST_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPENMETEO_TIMEOUT_SECS";

/// Upstream endpoints and request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocoding_url: String,
    pub forecast_url: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `OPENMETEO_*` environment overrides on top of this config.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_GEOCODING_URL) {
            self.geocoding_url = url;
        }
        if let Some(url) = lookup(ENV_FORECAST_URL) {
            self.forecast_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = raw.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_TIMEOUT_SECS, raw
                ))
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("geocoding_url", &self.geocoding_url)?;
        validate_url("forecast_url", &self.forecast_url)?;
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::ValidationError(format!("{} must not be empty", field)));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "{} must start with http:// or https://, got '{}'",
            field, url
        )));
    }
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_open_meteo() {
        let config = Config::default();
        assert_eq!(config.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(config.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parse_partial_yaml_keeps_defaults() {
        let config = Config::parse("timeout_secs: 3\n").unwrap();
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(config.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
geocoding_url: "http://localhost:8080/v1/search"
forecast_url: "http://localhost:8081/v1/forecast"
timeout_secs: 5
"#;
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.geocoding_url, "http://localhost:8080/v1/search");
        assert_eq!(config.forecast_url, "http://localhost:8081/v1/forecast");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        assert!(matches!(
            Config::parse("timeout_secs: 0"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            Config::parse("forecast_url: \"ftp://example.com\""),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            Config::parse("geocoding_url: \"\""),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            Config::parse("timeout_secs: [1, 2]"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn from_file_reads_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "forecast_url: \"http://127.0.0.1:9000/forecast\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.forecast_url, "http://127.0.0.1:9000/forecast");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let config = Config::parse("timeout_secs: 5")
            .unwrap()
            .with_overrides(env(&[
                (ENV_GEOCODING_URL, "http://geo.test/search"),
                (ENV_TIMEOUT_SECS, " 2 "),
            ]))
            .unwrap();
        assert_eq!(config.geocoding_url, "http://geo.test/search");
        assert_eq!(config.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(config.timeout_secs, 2);
    }

    #[test]
    fn env_override_bad_timeout_is_rejected() {
        let result = Config::default().with_overrides(env(&[(ENV_TIMEOUT_SECS, "soon")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));

        let result = Config::default().with_overrides(env(&[(ENV_TIMEOUT_SECS, "0")]));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
