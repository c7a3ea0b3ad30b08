// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties-style configuration files.
//!
//! The format is deliberately small: one `key = value` per line, blank lines and
//! `#`/`!` comment lines ignored.
//!
//! ```text
//! # gate at warnings, custom layout, extra location detail
//! level = WARNING
//! pattern = [%p] %c: %m%n
//! verbose = true
//! ```
//!
//! `level` accepts the same symbolic vocabulary as the `LOGGATE_LEVEL`
//! environment variable (`TRACE`, `DEBUG`, `INFO`, `WARNING`, `ERR`, `CRIT`,
//! `OFF`). Parsing is strict (unknown keys or bad values reject the whole file)
//! but the *consumer* is tolerant: [`Instance::set_config_file`](crate::Instance::set_config_file)
//! swallows any error here and falls back to the built-in console defaults,
//! because logging configuration must never abort the host process.

use crate::Level;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a config file was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected `key = value`")]
    Malformed { line: usize },
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: unrecognized level `{value}`")]
    InvalidLevel { line: usize, value: String },
    #[error("line {line}: `verbose` must be true or false, got `{value}`")]
    InvalidVerbose { line: usize, value: String },
}

/// Parsed contents of a config file. Absent keys leave the corresponding
/// instance state untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub level: Option<Level>,
    pub pattern: Option<String>,
    pub verbose: Option<bool>,
}

impl Config {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parses config text. Exposed for preflighting a file before pointing an
    /// instance at it.
    pub fn parse(text: &str) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        for (index, raw_line) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let (key, value) = trimmed
                .split_once('=')
                .ok_or(ConfigError::Malformed { line })?;
            let key = key.trim();
            let value = value.trim();
            match key {
                "level" => {
                    config.level = Some(Level::from_symbol(value).ok_or_else(|| {
                        ConfigError::InvalidLevel {
                            line,
                            value: value.to_string(),
                        }
                    })?);
                }
                "pattern" => {
                    config.pattern = Some(value.to_string());
                }
                "verbose" => {
                    config.verbose = Some(match value {
                        "true" => true,
                        "false" => false,
                        other => {
                            return Err(ConfigError::InvalidVerbose {
                                line,
                                value: other.to_string(),
                            });
                        }
                    });
                }
                other => {
                    return Err(ConfigError::UnknownKey {
                        line,
                        key: other.to_string(),
                    });
                }
            }
        }
        Ok(config)
    }
}
