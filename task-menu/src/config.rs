use crate::Error;
use crate::normalize::{DEFAULT_DESCRIPTION_MAX_CHARS, DEFAULT_TITLE_MAX_CHARS};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings. Every key is optional in the file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub limits: TaskLimits,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Maximum lengths, in characters, of the free-text task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskLimits {
    pub title_max_chars: usize,
    pub description_max_chars: usize,
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            description_max_chars: DEFAULT_DESCRIPTION_MAX_CHARS,
        }
    }
}

impl Config {
    /// Reads the file at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::from_source(config::File::from(path)),
            None => Ok(Self::default()),
        }
    }

    fn from_source<S>(source: S) -> Result<Self, Error>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder().add_source(source).build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat};

    fn from_toml(toml_str: &str) -> Result<Config, Error> {
        Config::from_source(File::from_str(toml_str, FileFormat::Toml))
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        // Act
        let config = Config::load(None).unwrap();

        // Assert
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.limits.title_max_chars, 100);
        assert_eq!(config.limits.description_max_chars, 500);
    }

    #[test]
    fn test_config_deserialize_from_toml() {
        // Arrange
        let toml_str = r#"
            [logging]
            level = "debug"

            [limits]
            title_max_chars = 20
            description_max_chars = 40
        "#;

        // Act
        let config = from_toml(toml_str).unwrap();

        // Assert
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.limits,
            TaskLimits {
                title_max_chars: 20,
                description_max_chars: 40,
            }
        );
    }

    #[test]
    fn test_config_missing_keys_fall_back_to_defaults() {
        // Arrange
        let toml_str = r#"
            [limits]
            title_max_chars = 10
        "#;

        // Act
        let config = from_toml(toml_str).unwrap();

        // Assert
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.limits.title_max_chars, 10);
        assert_eq!(config.limits.description_max_chars, 500);
    }

    #[test]
    fn test_config_wrong_type_is_an_error() {
        let toml_str = r#"
            [limits]
            title_max_chars = "lots"
        "#;

        let result = from_toml(toml_str);

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let result = Config::load(Some(Path::new("does/not/exist.toml")));

        assert!(matches!(result, Err(Error::Config(_))));
    }
}
