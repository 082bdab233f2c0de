//! Configuration management
//!
//! Loads the form rules and console limits from built-in defaults, an
//! optional TOML file and `LOGIN_FORM_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::validation::rules::DEFAULT_MIN_PASSWORD_LENGTH;

pub const DEFAULT_CONFIG_PATH: &str = "login-form.toml";
pub const DEFAULT_MAX_LINE_LENGTH: usize = 512;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Minimum password length accepted by the validator
    pub min_password_length: usize,

    /// Longest console line processed; longer lines are rejected
    pub max_line_length: usize,

    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (optional) with environment overrides
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("min_password_length", defaults.min_password_length as u64)?
            .set_default("max_line_length", defaults.max_line_length as u64)?
            .set_default("log_level", defaults.log_level)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("LOGIN_FORM").try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_password_length == 0 {
            return Err(ConfigError::Message(
                "min_password_length must be greater than 0".into(),
            ));
        }

        if self.max_line_length == 0 {
            return Err(ConfigError::Message(
                "max_line_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "login-form-{}-{}.toml",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.max_line_length, 512);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load("does-not-exist/login-form").unwrap();
        assert_eq!(config.min_password_length, AppConfig::default().min_password_length);
    }

    #[test]
    fn test_rejects_zero_values() {
        let config = AppConfig {
            min_password_length: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            max_line_length: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reads_file_values() {
        let path = write_config("file", "min_password_length = 8\n");
        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_rejects_zero_min_length_in_file() {
        let path = write_config("zero", "min_password_length = 0\n");
        let result = AppConfig::load(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let path = write_config("env", "max_line_length = 100\n");
        // Only this test touches this variable
        unsafe { std::env::set_var("LOGIN_FORM_MAX_LINE_LENGTH", "64") };
        let result = AppConfig::load(path.to_str().unwrap());
        unsafe { std::env::remove_var("LOGIN_FORM_MAX_LINE_LENGTH") };
        fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().max_line_length, 64);
    }
}
