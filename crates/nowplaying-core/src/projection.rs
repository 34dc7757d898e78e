//! Projection helpers that shape a normalized dictionary into the public
//! now-playing payload.
//!
//! These are pure functions; the service layer decides when to apply them.

use crate::dictionary::{DictValue, Dictionary};
use crate::number::try_coerce_number;

/// Prefix shared by every artwork-related key after normalization.
pub const ARTWORK_KEY_PREFIX: &str = "artwork";
/// Key that receives the artwork data URI.
pub const ARTWORK_DATA_KEY: &str = "artworkData";
/// Key holding the artwork MIME type reported by the player.
pub const ARTWORK_MIME_KEY: &str = "artworkMIMEType";
/// Key overwritten with the live elapsed time.
pub const ELAPSED_TIME_KEY: &str = "elapsedTime";
/// Key overwritten with the live track duration.
pub const DURATION_KEY: &str = "duration";

const FALLBACK_MIME: &str = "application/octet-stream";

/// Returns a copy of `dict` without the top-level keys starting with `prefix`.
pub fn remove_keys_with_prefix(dict: &Dictionary, prefix: &str) -> Dictionary {
    dict.iter()
        .filter(|(key, _)| !key.starts_with(prefix))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Stores `raw` under `key` as a number if the whole text is numeric.
///
/// Returns `true` when the field was written. Non-numeric input leaves any
/// existing value in place.
pub fn set_numeric_field(dict: &mut Dictionary, key: &str, raw: &str) -> bool {
    match try_coerce_number(raw) {
        Some(n) => {
            dict.insert(key, DictValue::Number(n));
            true
        }
        None => false,
    }
}

/// Builds a `data:` URI around an already base64-encoded payload.
///
/// A missing or blank `mime` falls back to `application/octet-stream`.
///
/// # Examples
///
/// ```rust
/// use nowplaying_core::projection::build_base64_data_uri;
///
/// assert_eq!(
///     build_base64_data_uri(Some("image/jpeg"), "/9j/4AAQ\n"),
///     "data:image/jpeg;base64,/9j/4AAQ"
/// );
/// ```
pub fn build_base64_data_uri(mime: Option<&str>, base64_payload: &str) -> String {
    let mime = mime.map(str::trim).filter(|m| !m.is_empty()).unwrap_or(FALLBACK_MIME);
    format!("data:{mime};base64,{}", base64_payload.trim())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
