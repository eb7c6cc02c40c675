//! Runtime configuration.
//!
//! The only setting is where the dataset document lives. It can be overridden with the
//! `SIBA_DATA_URL` environment variable at runtime (desktop builds) or at compile time (web
//! builds, where there is no process environment).

use crate::error::ConfigError;

/// Dataset location used when `SIBA_DATA_URL` is not set.
pub const DEFAULT_DATA_URL: &str = "./data/dataBahanAjar.json";

const DATA_URL_VAR: &str = "SIBA_DATA_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var(DATA_URL_VAR).ok(), option_env!("SIBA_DATA_URL"))
    }

    /// Resolves the configuration from a runtime value and a compile-time value, in that order.
    fn from_values(runtime: Option<String>, compiled: Option<&str>) -> Result<Self, ConfigError> {
        let data_url = runtime
            .or_else(|| compiled.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string());

        if data_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: DATA_URL_VAR.to_string(),
                reason: "value must not be empty".to_string(),
            });
        }

        Ok(Self { data_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests falling back to the bundled dataset path.
    ///
    /// Expected: DEFAULT_DATA_URL
    #[test]
    fn defaults_without_overrides() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
    }

    /// Tests that the runtime value wins over the compile-time value.
    ///
    /// Expected: the runtime URL
    #[test]
    fn runtime_overrides_compiled() {
        let config = Config::from_values(
            Some("https://cdn.example.ac.id/bahan-ajar.json".to_string()),
            Some("./compiled.json"),
        )
        .unwrap();
        assert_eq!(config.data_url, "https://cdn.example.ac.id/bahan-ajar.json");
    }

    /// Tests the compile-time value when no runtime value exists.
    ///
    /// Expected: the compiled URL
    #[test]
    fn compiled_overrides_default() {
        let config = Config::from_values(None, Some("./compiled.json")).unwrap();
        assert_eq!(config.data_url, "./compiled.json");
    }

    /// Tests rejecting a blank value.
    ///
    /// Expected: Err(ConfigError::InvalidEnvValue)
    #[test]
    fn rejects_blank_value() {
        let result = Config::from_values(Some("  ".to_string()), None);
        assert!(matches!(result, Err(ConfigError::InvalidEnvValue { .. })));
    }
}
