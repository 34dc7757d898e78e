//! nowplaying-server library crate.
//!
//! An HTTP service that reports what the local media player is playing and
//! forwards transport commands to it. All player access goes through an
//! external status binary (`nowplaying-cli` by default).
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! HTTP client
//!         ↕
//! [nowplaying-server]
//!   ├── domain/              MediaCommand, MediaField, ServerConfig
//!   ├── application/         NowPlayingService, MediaController trait
//!   └── infrastructure/
//!         ├── http_server/     axum routes and serve loop
//!         ├── cli_controller/  MediaController over tokio::process
//!         ├── binary_resolver/ PATH lookup with bundled fallback
//!         └── config_file/     optional TOML settings
//!         ↕
//! nowplaying-cli  (get-raw, get <field>, play, pause, ...)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `nowplaying-core` only.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: commands, fields and configuration.
pub mod domain;

/// Application layer: snapshot and command use cases.
pub mod application;

/// Infrastructure layer: process control, config file and HTTP.
pub mod infrastructure;
