//! Optional TOML configuration file.
//!
//! Every field is optional; anything left out falls through to the CLI or
//! environment value, then to the built-in default. Example:
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 4000
//! bin = "/opt/homebrew/bin/nowplaying-cli"
//! key_prefix = "kMRMediaRemoteNowPlayingInfo"
//! max_depth = 32
//! command_timeout_secs = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings that may appear in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub bin: Option<PathBuf>,
    pub bin_fallback: Option<PathBuf>,
    pub key_prefix: Option<String>,
    /// `0` disables the nesting limit.
    pub max_depth: Option<usize>,
    pub command_timeout_secs: Option<u64>,
}

/// Reads and parses the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not valid for [`FileConfig`].
pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text)
}

/// Parses config file text.
pub fn parse_config(text: &str) -> Result<FileConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
