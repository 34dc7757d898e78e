//! Typed values produced by the dictionary decoder.
//!
//! A decoded dump is a strict tree: every [`Dictionary`] owns its entries and
//! every nested dictionary is owned by the [`DictValue`] slot that holds it.
//! The grammar has no arrays, booleans or null, so a missing key is the only
//! way to express "unset".
//!
//! # Serialization
//!
//! Both types serialize to plain JSON through `serde`:
//!
//! ```rust
//! use nowplaying_core::{DictValue, Dictionary};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("title", DictValue::from("Song"));
//! dict.insert("duration", DictValue::from(212.5));
//! let json = serde_json::to_string(&dict).unwrap();
//! assert_eq!(json, r#"{"title":"Song","duration":212.5}"#);
//! ```

use indexmap::map::{IntoIter, Iter, Keys};
use indexmap::IndexMap;
use serde::Serialize;

/// One value in a decoded dictionary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DictValue {
    /// Text, either a bare token or the contents of a quoted string.
    String(String),
    /// Any value whose whole text parses as a 64-bit float.
    Number(f64),
    /// A `{ ... }` block, decoded recursively.
    Dictionary(Dictionary),
}

impl DictValue {
    /// Returns the text if this is a [`DictValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DictValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`DictValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DictValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested dictionary if this is a [`DictValue::Dictionary`].
    pub fn as_dictionary(&self) -> Option<&Dictionary> {
        match self {
            DictValue::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

impl From<&str> for DictValue {
    fn from(value: &str) -> Self {
        DictValue::String(value.to_string())
    }
}

impl From<String> for DictValue {
    fn from(value: String) -> Self {
        DictValue::String(value)
    }
}

impl From<f64> for DictValue {
    fn from(value: f64) -> Self {
        DictValue::Number(value)
    }
}

impl From<Dictionary> for DictValue {
    fn from(value: Dictionary) -> Self {
        DictValue::Dictionary(value)
    }
}

/// An ordered mapping from key to [`DictValue`].
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the slot of the first insertion, so iteration order stays the order in
/// which keys first appeared in the source text.
///
/// Equality ignores order; compare [`Dictionary::keys`] when order matters.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: IndexMap<String, DictValue>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&DictValue> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: DictValue) -> Option<DictValue> {
        self.entries.insert(key.into(), value)
    }

    /// Removes `key`, preserving the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<DictValue> {
        self.entries.shift_remove(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, DictValue> {
        self.entries.keys()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, DictValue> {
        self.entries.iter()
    }
}

impl FromIterator<(String, DictValue)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, DictValue)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, DictValue);
    type IntoIter = IntoIter<String, DictValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a DictValue);
    type IntoIter = Iter<'a, String, DictValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
