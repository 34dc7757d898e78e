//! Lenient decoder for the textual dictionary dump format.
//!
//! Input looks like the `description` of a native dictionary:
//!
//! ```text
//! {
//!     kMRMediaRemoteNowPlayingInfoArtist = "Daft Punk";
//!     kMRMediaRemoteNowPlayingInfoDuration = 212.5;
//!     kMRMediaRemoteNowPlayingInfoPlaybackRate = 1;
//!     kMRMediaRemoteNowPlayingInfoUniqueIdentifier = 4150532;
//! }
//! ```
//!
//! Grammar:
//!
//! ```text
//! dict          := '{'? entry (';' entry)* '}'?
//! entry         := key '=' value
//! key           := any text up to the first '='
//! value         := dict | quoted-string | bare-token
//! quoted-string := '"' text '"'
//! bare-token    := text up to the next ';' or enclosing '}'
//! ```
//!
//! The decoder never fails. Segments without `=` are skipped, unbalanced
//! braces or quotes fold the remainder into a single segment, and empty input
//! decodes to an empty [`Dictionary`].

use tracing::{debug, trace};

use crate::dictionary::value::{DictValue, Dictionary};
use crate::number::try_coerce_number;

/// Tuning knobs for [`decode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest nesting level that is decoded as a [`Dictionary`].
    ///
    /// The top-level dictionary is level 0, so `Some(1)` decodes the values
    /// of the top level but keeps anything nested inside them as opaque
    /// text. `None` (the default) recurses without limit.
    pub max_depth: Option<usize>,
}

impl DecodeOptions {
    /// Options that stop descending below `max_depth` nesting levels.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes a dictionary dump into a typed [`Dictionary`].
///
/// Recursion depth equals the brace-nesting depth of `raw` and is not
/// bounded here. Callers that accept untrusted input should use
/// [`decode_with`] and a [`DecodeOptions::max_depth`].
///
/// # Examples
///
/// ```rust
/// use nowplaying_core::{decode, DictValue};
///
/// let dict = decode(r#"{a=1;b="x";c={d=2}}"#);
/// assert_eq!(dict.get("a"), Some(&DictValue::Number(1.0)));
/// assert_eq!(dict.get("b"), Some(&DictValue::from("x")));
/// let nested = dict.get("c").and_then(DictValue::as_dictionary).unwrap();
/// assert_eq!(nested.get("d"), Some(&DictValue::Number(2.0)));
/// ```
pub fn decode(raw: &str) -> Dictionary {
    decode_with(raw, &DecodeOptions::default())
}

/// Decodes a dictionary dump, honouring `options`.
///
/// A nested `{ ... }` value that would sit deeper than
/// [`DecodeOptions::max_depth`] is stored verbatim as a
/// [`DictValue::String`].
pub fn decode_with(raw: &str, options: &DecodeOptions) -> Dictionary {
    decode_level(raw, options, 0)
}

// ── Decoding ──────────────────────────────────────────────────────────────────

fn decode_level(raw: &str, options: &DecodeOptions, depth: usize) -> Dictionary {
    let body = strip_outer_braces(raw.trim());
    let mut dict = Dictionary::new();

    for segment in split_entries(body) {
        let Some((key, value)) = segment.split_once('=') else {
            trace!(segment, "skipping dictionary segment without '='");
            continue;
        };
        let value = type_value(value.trim(), options, depth);
        dict.insert(key.trim(), value);
    }

    dict
}

/// Types one trimmed value: nested block, quoted string, or bare token.
fn type_value(value: &str, options: &DecodeOptions, depth: usize) -> DictValue {
    if value.starts_with('{') && value.ends_with('}') {
        if options.allows(depth + 1) {
            return DictValue::Dictionary(decode_level(value, options, depth + 1));
        }
        debug!(depth = depth + 1, "nesting limit reached; keeping block as text");
        return DictValue::String(value.to_string());
    }

    let text = unquote(value).unwrap_or(value);
    match try_coerce_number(text) {
        Some(n) => DictValue::Number(n),
        None => DictValue::String(text.to_string()),
    }
}

/// Strips at most one leading `{` and one trailing `}`.
///
/// The trailing `}` is only taken when nothing inside the body opened it, so
/// `a={}` keeps its empty block while `{a=1}` and `a=1}` both lose the brace.
fn strip_outer_braces(s: &str) -> &str {
    let s = s.strip_prefix('{').unwrap_or(s);
    match s.strip_suffix('}') {
        Some(inner) if brace_balance(s) < 0 => inner,
        _ => s,
    }
}

/// Opening minus closing braces outside quoted strings.
fn brace_balance(s: &str) -> isize {
    let mut quotes = QuoteTracker::default();
    s.chars()
        .filter(|&c| quotes.is_structural(c))
        .map(|c| match c {
            '{' => 1,
            '}' => -1,
            _ => 0,
        })
        .sum()
}

/// Where the scan position sits within the current entry.
#[derive(Default, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// Before the entry's first `=`.
    #[default]
    Key,
    /// After the first `=`, before any non-whitespace value text.
    ValueStart,
    /// Inside a bare value, or after a quoted one has closed.
    Value,
}

/// Tracks whether the scan position is inside a double-quoted string.
///
/// A quoted string only opens when `"` is the first non-whitespace character
/// of a value. A `"` inside a key or a bare token is plain text. A backslash
/// inside quotes shields the next character, so an escaped `\"` does not end
/// the string.
#[derive(Default)]
struct QuoteTracker {
    slot: Slot,
    in_quotes: bool,
    escaped: bool,
}

impl QuoteTracker {
    /// Feeds `c` and reports whether it is structural text outside quotes.
    fn is_structural(&mut self, c: char) -> bool {
        if self.in_quotes {
            match c {
                _ if self.escaped => self.escaped = false,
                '\\' => self.escaped = true,
                '"' => {
                    self.in_quotes = false;
                    self.slot = Slot::Value;
                }
                _ => {}
            }
            return false;
        }

        match (self.slot, c) {
            (_, ';' | '{') => self.slot = Slot::Key,
            (_, '}') => self.slot = Slot::Value,
            (Slot::Key, '=') => self.slot = Slot::ValueStart,
            (Slot::ValueStart, '"') => {
                self.in_quotes = true;
                return false;
            }
            (Slot::ValueStart, c) if !c.is_whitespace() => self.slot = Slot::Value,
            _ => {}
        }
        true
    }
}

/// Returns the text between a pair of wrapping double quotes.
///
/// No escape processing is done. A lone `"` unwraps to the empty string.
fn unquote(value: &str) -> Option<&str> {
    if value == "\"" {
        return Some("");
    }
    value.strip_prefix('"')?.strip_suffix('"')
}

/// Splits a dictionary body on the `;` separators that belong to it.
///
/// Separators inside a quoted string or a nested `{ ... }` block are part of
/// that value. Blank segments are dropped.
fn split_entries(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut quotes = QuoteTracker::default();

    for (i, c) in body.char_indices() {
        if !quotes.is_structural(c) {
            continue;
        }
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&body[start..]);

    segments.retain(|s| !s.trim().is_empty());
    segments
}

// ── Tests ─────────────────────────────────────────────────────────────────────
