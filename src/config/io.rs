use crate::config::data::EmojiConfig;
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Errors that can occur when loading emoji configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        /// Path to the configuration file with invalid TOML.
        path: PathBuf,
        /// The TOML deserialization error.
        source: toml::de::Error,
    },

    /// Failed to serialize or write the configuration.
    Write {
        path: PathBuf,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read emoji config at {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse emoji config at {}: {}",
                    path.display(),
                    source
                )
            }
            ConfigError::Write { path, message } => {
                write!(
                    f,
                    "Failed to save emoji config at {}: {}",
                    path.display(),
                    message
                )
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Write { .. } => None,
        }
    }
}

impl EmojiConfig {
    /// Load configuration from `config_path`. A missing file yields the
    /// defaults.
    pub fn load_from_path(config_path: &Path) -> Result<EmojiConfig, ConfigError> {
        if !config_path.exists() {
            return Ok(EmojiConfig::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<EmojiConfig, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Write the configuration to `config_path` atomically, creating parent
    /// directories as needed.
    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let write_error = |message: String| ConfigError::Write {
            path: config_path.to_path_buf(),
            message,
        };
        let contents = toml::to_string_pretty(self).map_err(|e| write_error(e.to_string()))?;

        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;

        // Same directory as the target so the final rename stays atomic.
        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| write_error(e.to_string()))?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| write_error(e.to_string()))?;
        temp_file
            .as_file_mut()
            .sync_all()
            .map_err(|e| write_error(e.to_string()))?;
        temp_file
            .persist(config_path)
            .map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }

    /// `emoji.toml` in the platform config directory, if one can be
    /// determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "permacommons", "chabeau")
            .map(|dirs| dirs.config_dir().join("emoji.toml"))
    }

    /// Load from [`Self::default_path`], falling back to defaults when no
    /// config directory exists.
    pub fn load_default() -> Result<EmojiConfig, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(EmojiConfig::default()),
        }
    }
}
