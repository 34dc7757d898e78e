//! NowPlayingService: turns status-tool output into the public payload.
//!
//! # Snapshot flow
//!
//! ```text
//! get-raw ──► decode ──► normalize ──► artwork? ──► elapsedTime ┐
//!                                        │                      ├─► payload
//!                                        │          duration ───┘
//!                                        └─ no: drop artwork* keys
//!                                           yes: artworkData → data URI
//! ```
//!
//! The dump's elapsed time is sampled when playback state last changed, so
//! the live `elapsedTime` and `duration` fields are re-read separately.

use std::sync::Arc;

use nowplaying_core::projection::{
    build_base64_data_uri, remove_keys_with_prefix, set_numeric_field, ARTWORK_DATA_KEY,
    ARTWORK_KEY_PREFIX, ARTWORK_MIME_KEY, DURATION_KEY, ELAPSED_TIME_KEY,
};
use nowplaying_core::{decode_with, normalize, DecodeOptions, DictValue, Dictionary};
use thiserror::Error;
use tracing::debug;

use crate::application::controller::{ControllerError, ControllerRequest, MediaController};
use crate::domain::media::{MediaCommand, MediaField};

/// Errors surfaced by the service to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

/// Which variant of the snapshot the caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotQuery {
    /// Return the dump text untouched.
    pub raw: bool,
    /// Keep artwork keys and embed the artwork as a data URI.
    pub artwork: bool,
}

/// Result of [`NowPlayingService::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Raw(String),
    Structured(Dictionary),
}

/// Stateless service shared by every request handler.
pub struct NowPlayingService {
    controller: Arc<dyn MediaController>,
    key_prefix: String,
    decode_options: DecodeOptions,
}

impl NowPlayingService {
    pub fn new(
        controller: Arc<dyn MediaController>,
        key_prefix: impl Into<String>,
        decode_options: DecodeOptions,
    ) -> Self {
        Self {
            controller,
            key_prefix: key_prefix.into(),
            decode_options,
        }
    }

    /// Reads the current track and projects it according to `query`.
    ///
    /// `elapsedTime` and `duration` are re-read from the status tool. When
    /// that output is empty or not numeric (for example `null`), the field
    /// keeps the value decoded from the dump, or stays absent if the dump had
    /// none. It is never set to JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Controller`] if any invocation of the status
    /// tool fails. A dump that does not decode is not an error; it yields an
    /// empty or partial dictionary.
    pub async fn snapshot(&self, query: SnapshotQuery) -> Result<Snapshot, ServiceError> {
        let raw = self.controller.execute(ControllerRequest::GetRaw).await?;
        if query.raw {
            return Ok(Snapshot::Raw(raw));
        }

        let decoded = decode_with(&raw, &self.decode_options);
        let mut data = normalize(&decoded, &self.key_prefix);
        debug!(keys = data.len(), "decoded now-playing dump");

        if query.artwork {
            self.embed_artwork(&mut data).await?;
        } else {
            data = remove_keys_with_prefix(&data, ARTWORK_KEY_PREFIX);
        }

        let (elapsed, duration) = tokio::join!(
            self.controller
                .execute(ControllerRequest::Get(MediaField::ElapsedTime)),
            self.controller
                .execute(ControllerRequest::Get(MediaField::Duration)),
        );
        set_numeric_field(&mut data, ELAPSED_TIME_KEY, &elapsed?);
        set_numeric_field(&mut data, DURATION_KEY, &duration?);

        Ok(Snapshot::Structured(data))
    }

    /// Sends a transport command to the player.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Controller`] if the status tool fails.
    pub async fn send_command(&self, command: MediaCommand) -> Result<(), ServiceError> {
        self.controller
            .execute(ControllerRequest::Command(command))
            .await?;
        Ok(())
    }

    async fn embed_artwork(&self, data: &mut Dictionary) -> Result<(), ServiceError> {
        let artwork = self
            .controller
            .execute(ControllerRequest::Get(MediaField::ArtworkData))
            .await?;
        if artwork.is_empty() {
            return Ok(());
        }

        let mime = data
            .get(ARTWORK_MIME_KEY)
            .and_then(DictValue::as_str)
            .map(str::to_owned);
        let uri = build_base64_data_uri(mime.as_deref(), &artwork);
        data.insert(ARTWORK_DATA_KEY, DictValue::String(uri));
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
