//! Now-playing HTTP server: entry point.
//!
//! Serves the current track of the local media player as JSON and accepts
//! transport commands (`play`, `pause`, `toggle`, `next`, `previous`). All
//! player access goes through an external status binary.
//!
//! # Usage
//!
//! ```text
//! nowplaying-server [OPTIONS]
//!
//! Options:
//!   --bin             <PATH>  Status binary, name or path [default: nowplaying-cli]
//!   --bin-fallback    <PATH>  Used when --bin is missing [default: <exe dir>/bin/nowplaying]
//!   --host            <HOST>  Bind address [default: 0.0.0.0]
//!   --port            <PORT>  Bind port [default: 3333]
//!   --key-prefix      <TEXT>  Prefix stripped from dump keys [default: kMRMediaRemoteNowPlayingInfo]
//!   --max-depth       <N>     Nesting limit, 0 for none [default: 64]
//!   --command-timeout <SECS>  Per-invocation time limit [default: 5]
//!   --config          <PATH>  Optional TOML file
//! ```
//!
//! # Precedence
//!
//! CLI arguments, then environment variables, then the TOML file, then the
//! built-in defaults.
//!
//! | Variable                     | Flag                |
//! |------------------------------|---------------------|
//! | `PATH_BIN`                   | `--bin`             |
//! | `NOWPLAYING_BIN_FALLBACK`    | `--bin-fallback`    |
//! | `HOST`                       | `--host`            |
//! | `PORT`                       | `--port`            |
//! | `NOWPLAYING_KEY_PREFIX`      | `--key-prefix`      |
//! | `NOWPLAYING_MAX_DEPTH`       | `--max-depth`       |
//! | `NOWPLAYING_COMMAND_TIMEOUT` | `--command-timeout` |
//! | `NOWPLAYING_CONFIG`          | `--config`          |

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nowplaying_server::application::NowPlayingService;
use nowplaying_server::domain::ServerConfig;
use nowplaying_server::infrastructure::{
    load_config, resolve_binary, run_server, CliController, FileConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// HTTP service exposing the current now-playing track.
///
/// Every option is optional so that unset values can fall through to the
/// config file before the built-in default applies.
#[derive(Debug, Default, Parser)]
#[command(
    name = "nowplaying-server",
    about = "HTTP service exposing the current now-playing track as JSON",
    version
)]
struct Cli {
    /// Status binary: a bare name searched on PATH, or a path.
    #[arg(long, env = "PATH_BIN")]
    bin: Option<PathBuf>,

    /// Binary used when --bin cannot be found or is not executable.
    #[arg(long, env = "NOWPLAYING_BIN_FALLBACK")]
    bin_fallback: Option<PathBuf>,

    /// IP address to bind the HTTP listener to.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// TCP port for the HTTP listener.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Provider prefix stripped from top-level keys of the dump.
    #[arg(long, env = "NOWPLAYING_KEY_PREFIX")]
    key_prefix: Option<String>,

    /// Deepest nesting level decoded as a dictionary. `0` removes the limit.
    #[arg(long, env = "NOWPLAYING_MAX_DEPTH")]
    max_depth: Option<usize>,

    /// Seconds a single invocation of the status binary may run.
    #[arg(long, env = "NOWPLAYING_COMMAND_TIMEOUT")]
    command_timeout: Option<u64>,

    /// Optional TOML config file.
    #[arg(long, env = "NOWPLAYING_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Merges these arguments over `file` and the built-in defaults.
    ///
    /// `default_fallback` is the bundled binary used when neither the CLI nor
    /// the file names one.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not a valid IP address.
    fn into_server_config(
        self,
        file: FileConfig,
        default_fallback: PathBuf,
    ) -> anyhow::Result<ServerConfig> {
        let defaults = ServerConfig::default();

        let host = self.host.or(file.host);
        let ip: IpAddr = match host {
            Some(host) => host
                .parse()
                .with_context(|| format!("invalid bind host: '{host}'"))?,
            None => defaults.bind_addr.ip(),
        };
        let port = self.port.or(file.port).unwrap_or(defaults.bind_addr.port());

        let max_depth = match self.max_depth.or(file.max_depth) {
            Some(0) => None,
            Some(depth) => Some(depth),
            None => defaults.max_depth,
        };

        let command_timeout = self
            .command_timeout
            .or(file.command_timeout_secs)
            .map(Duration::from_secs)
            .unwrap_or(defaults.command_timeout);

        Ok(ServerConfig {
            bind_addr: SocketAddr::new(ip, port),
            binary: self.bin.or(file.bin).unwrap_or(defaults.binary),
            binary_fallback: self
                .bin_fallback
                .or(file.bin_fallback)
                .unwrap_or(default_fallback),
            key_prefix: self
                .key_prefix
                .or(file.key_prefix)
                .unwrap_or(defaults.key_prefix),
            max_depth,
            command_timeout,
        })
    }
}

/// `bin/nowplaying` next to the running executable, or relative to the
/// working directory when the executable path is unavailable.
fn default_fallback() -> PathBuf {
    let relative = ServerConfig::default().binary_fallback;
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&relative)))
        .unwrap_or(relative)
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => FileConfig::default(),
    };
    let config = cli.into_server_config(file, default_fallback())?;

    let binary = resolve_binary(&config.binary, &config.binary_fallback)
        .context("cannot start without a media-status binary")?;

    info!(
        "now-playing server starting: bind={}, binary={}",
        config.bind_addr,
        binary.display()
    );

    let controller = Arc::new(CliController::new(binary, config.command_timeout));
    let service = Arc::new(NowPlayingService::new(
        controller,
        config.key_prefix.clone(),
        config.decode_options(),
    ));

    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, initiating graceful shutdown"),
            Err(e) => error!("failed to listen for Ctrl+C signal: {e}"),
        }
    };

    run_server(&config, service, shutdown).await?;

    info!("now-playing server stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
