//! Server configuration types.
//!
//! [`ServerConfig`] is the single source of truth for all runtime settings.
//! `main.rs` fills it from CLI arguments, environment variables and an
//! optional TOML file; tests build it directly or start from
//! [`ServerConfig::default`].

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use nowplaying_core::{DecodeOptions, DEFAULT_KEY_PREFIX};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3333;
/// Default name of the media-status binary, looked up on `PATH`.
pub const DEFAULT_BINARY: &str = "nowplaying-cli";
/// Default nesting limit applied when decoding the dump.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default time limit for a single invocation of the status binary.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// All runtime configuration for the now-playing server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Preferred status binary: a bare name searched on `PATH`, or a path.
    pub binary: PathBuf,

    /// Binary used when `binary` cannot be found or is not executable.
    pub binary_fallback: PathBuf,

    /// Provider prefix stripped from top-level keys of the dump.
    pub key_prefix: String,

    /// Deepest nesting level decoded as a dictionary; `None` is unbounded.
    pub max_depth: Option<usize>,

    /// Time after which a running status binary is killed.
    pub command_timeout: Duration,
}

impl ServerConfig {
    /// Decoder options derived from this configuration.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
        }
    }
}

impl Default for ServerConfig {
    /// | Field           | Default                          |
    /// |-----------------|----------------------------------|
    /// | bind_addr       | `0.0.0.0:3333`                   |
    /// | binary          | `nowplaying-cli`                 |
    /// | binary_fallback | `bin/nowplaying`                 |
    /// | key_prefix      | `kMRMediaRemoteNowPlayingInfo`   |
    /// | max_depth       | 64                               |
    /// | command_timeout | 5 seconds                        |
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            binary: PathBuf::from(DEFAULT_BINARY),
            binary_fallback: PathBuf::from("bin").join("nowplaying"),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
