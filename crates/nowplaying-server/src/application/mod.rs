//! Application layer for nowplaying-server.
//!
//! Knows *what* to do for each request (which tool invocations to make and
//! how to shape the result) but delegates *how* to run the tool to the
//! infrastructure layer through the [`MediaController`] trait.

pub mod controller;
pub mod now_playing_service;

pub use controller::{ControllerError, ControllerRequest, MediaController};
pub use now_playing_service::{NowPlayingService, ServiceError, Snapshot, SnapshotQuery};
