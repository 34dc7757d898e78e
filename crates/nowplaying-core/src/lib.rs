//! # nowplaying-core
//!
//! Shared library for the now-playing bridge containing the dictionary-dump
//! decoder, the key normalizer, and the projection helpers that shape the
//! public JSON payload.
//!
//! It has no dependencies on processes, sockets, or HTTP. Every function is
//! pure and total: malformed input degrades to a partial or empty result,
//! never to an error.
//!
//! # Architecture overview
//!
//! Media-status tools on macOS print the current track as the textual
//! description of a native dictionary. The pipeline turns that text into
//! clean JSON in three stages:
//!
//! - **`dictionary`** – The typed value tree ([`Dictionary`], [`DictValue`])
//!   and the lenient decoder ([`decode`], [`decode_with`]).
//!
//! - **`normalize`** – Strips the provider prefix from top-level keys and
//!   lowercases the first remaining character ([`normalize`]).
//!
//! - **`projection`** – Removes key groups, overwrites numeric fields, and
//!   assembles base64 data URIs.
//!
//! ```rust
//! use nowplaying_core::{decode, normalize, DictValue, DEFAULT_KEY_PREFIX};
//!
//! let raw = "{ kMRMediaRemoteNowPlayingInfoTitle = \"Song\"; kMRMediaRemoteNowPlayingInfoDuration = 200; }";
//! let dict = normalize(&decode(raw), DEFAULT_KEY_PREFIX);
//! assert_eq!(dict.get("title"), Some(&DictValue::from("Song")));
//! assert_eq!(dict.get("duration"), Some(&DictValue::Number(200.0)));
//! ```

pub mod dictionary;
pub mod normalize;
pub mod number;
pub mod projection;

// Re-export the most-used items at the crate root so callers can write
// `nowplaying_core::decode` instead of `nowplaying_core::dictionary::decode::decode`.
pub use dictionary::{decode, decode_with, DecodeOptions, DictValue, Dictionary};
pub use normalize::{normalize, DEFAULT_KEY_PREFIX};
pub use number::try_coerce_number;
