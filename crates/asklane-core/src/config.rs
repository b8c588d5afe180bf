//! Configuration handling for asklane

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::AskError;
use crate::query::{QuestionSort, TagSort, DEFAULT_SUGGESTION_LIMIT};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "asklane.toml";

/// asklane configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// asklane settings
    #[serde(default)]
    pub asklane: AskConfig,
}

/// Display and loading preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskConfig {
    /// Default question list ordering
    #[serde(default)]
    pub question_sort: QuestionSort,

    /// Default tag browser ordering
    #[serde(default)]
    pub tag_sort: TagSort,

    /// Maximum tag suggestions offered while asking
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Simulated load delay for question pages, in milliseconds
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,

    /// Dataset file used instead of the builtin fixture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<PathBuf>,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_load_delay_ms() -> u64 {
    300
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            question_sort: QuestionSort::default(),
            tag_sort: TagSort::default(),
            suggestion_limit: default_suggestion_limit(),
            load_delay_ms: default_load_delay_ms(),
            fixture: None,
        }
    }
}

impl AskConfig {
    /// The load delay as a duration
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, AskError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AskError::config(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|e| {
            AskError::config(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;
        // relative fixture paths are relative to the config file
        if let (Some(fixture), Some(dir)) = (config.asklane.fixture.as_mut(), path.parent()) {
            if fixture.is_relative() {
                *fixture = dir.join(&*fixture);
            }
        }
        Ok(config)
    }

    /// Load asklane.toml from the given directory, or defaults if absent
    pub fn load_or_default(dir: &Path) -> Result<Self, AskError> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.asklane.question_sort, QuestionSort::Newest);
        assert_eq!(config.asklane.tag_sort, TagSort::Popular);
        assert_eq!(config.asklane.suggestion_limit, 5);
        assert_eq!(config.asklane.load_delay(), Duration::from_millis(300));
        assert!(config.asklane.fixture.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[asklane]\nquestion_sort = \"votes\"\n").unwrap();
        assert_eq!(config.asklane.question_sort, QuestionSort::Votes);
        assert_eq!(config.asklane.tag_sort, TagSort::Popular);
        assert_eq!(config.asklane.load_delay_ms, 300);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[asklane]\ntag_sort = \"random\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_resolves_fixture_next_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[asklane]\nfixture = \"data.json\"\nload_delay_ms = 0\n").unwrap();

        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.asklane.fixture, Some(dir.path().join("data.json")));
        assert_eq!(config.asklane.load_delay(), Duration::ZERO);
    }

    #[test]
    fn test_missing_file_in_dir_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load_or_default(dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_named_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert_eq!(err.error_code().code(), 4);
    }
}
