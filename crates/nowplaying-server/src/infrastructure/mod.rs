//! Infrastructure layer for nowplaying-server.
//!
//! Everything that touches the outside world lives here.
//!
//! # Responsibilities
//!
//! - Locating the media-status binary on startup
//! - Spawning it for each request, with a time limit
//! - Reading the optional TOML config file
//! - Serving HTTP and shutting down cleanly
//!
//! # What does NOT belong here?
//!
//! - Decoding or reshaping the dump (that is `nowplaying-core` and the
//!   application layer)
//! - Merging CLI, environment and file settings (that is done in `main.rs`)

pub mod binary_resolver;
pub mod cli_controller;
pub mod config_file;
pub mod http_server;

pub use binary_resolver::{resolve_binary, ResolveError};
pub use cli_controller::CliController;
pub use config_file::{load_config, ConfigError, FileConfig};
pub use http_server::{build_router, run_server};
