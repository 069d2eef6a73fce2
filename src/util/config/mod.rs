//! MiniFilter configuration system
//!
//! # Configuration hierarchy
//!
//! ```text
//! Priority (high → low):
//! 1. CLI arguments
//! 2. File given with --config
//! 3. Project-level (./minifilter.toml)
//! 4. Default values
//! ```
//!
//! # Example
//!
//! ```toml
//! [lexer]
//! line_comments = true
//!
//! [output]
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Project-level config file name
pub const CONFIG_FILE_NAME: &str = "minifilter.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lexer settings
    #[serde(default)]
    pub lexer: LexerConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Treat `#` up to end of line as a comment.
    /// Off by default, in which case `#` is an illegal character.
    #[serde(default)]
    pub line_comments: bool,
}

/// How PIF and symbol table are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text tables
    #[default]
    Table,
    /// A single JSON document
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config parse error in {path}: {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Load configuration from a file
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration
///
/// Uses `explicit` when given, otherwise `minifilter.toml` in `dir` if it
/// exists, otherwise defaults.
pub fn load_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return load_config_file(path);
    }

    let project = dir.join(CONFIG_FILE_NAME);
    if project.is_file() {
        tracing::debug!(path = %project.display(), "loading project config");
        return load_config_file(&project);
    }

    Ok(Config::default())
}
