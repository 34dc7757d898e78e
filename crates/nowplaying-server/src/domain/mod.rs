//! Domain layer for nowplaying-server.
//!
//! Pure types with no I/O: the media commands and fields the status binary
//! understands, and the server configuration.
//!
//! # What does NOT belong here?
//!
//! - Any `tokio`, process, or socket types
//! - File I/O or environment variable reading

pub mod config;
pub mod media;

pub use config::ServerConfig;
pub use media::{CommandParseError, MediaCommand, MediaField};
