//! Rewrites provider-namespaced top-level keys into their public form.
//!
//! Native now-playing dictionaries namespace every key with the framework
//! prefix, e.g. `kMRMediaRemoteNowPlayingInfoElapsedTime`. Normalizing with
//! that prefix yields `elapsedTime`. Only the outer envelope is namespaced, so
//! nested dictionaries are carried over as they are.

use crate::dictionary::Dictionary;

/// Key prefix used by the macOS MediaRemote framework.
pub const DEFAULT_KEY_PREFIX: &str = "kMRMediaRemoteNowPlayingInfo";

/// Returns a copy of `dict` with `prefix` stripped from its top-level keys.
///
/// A key that starts with `prefix` becomes the remainder with its first
/// character lowercased. Other keys are kept. Values are cloned unchanged.
/// If two keys collapse onto the same name, the later one wins.
///
/// # Examples
///
/// ```rust
/// use nowplaying_core::{normalize, DictValue, Dictionary};
///
/// let mut dict = Dictionary::new();
/// dict.insert("kFooBar", DictValue::from(1.0));
/// dict.insert("other", DictValue::from(2.0));
///
/// let out = normalize(&dict, "kFoo");
/// assert_eq!(out.keys().collect::<Vec<_>>(), ["bar", "other"]);
/// ```
pub fn normalize(dict: &Dictionary, prefix: &str) -> Dictionary {
    dict.iter()
        .map(|(key, value)| (normalize_key(key, prefix), value.clone()))
        .collect()
}

fn normalize_key(key: &str, prefix: &str) -> String {
    match key.strip_prefix(prefix) {
        Some(rest) => lowercase_first(rest),
        None => key.to_string(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{decode, DictValue};

    #[test]
    fn test_prefixed_key_is_stripped_and_lowercased() {
        let dict = decode("kFooBar=1;other=2");

        let out = normalize(&dict, "kFoo");

        assert_eq!(out.get("bar"), Some(&DictValue::Number(1.0)));
        assert_eq!(out.get("other"), Some(&DictValue::Number(2.0)));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_media_remote_keys() {
        let dict = decode(
            "{kMRMediaRemoteNowPlayingInfoTitle=Song;kMRMediaRemoteNowPlayingInfoElapsedTime=3.5}",
        );

        let out = normalize(&dict, DEFAULT_KEY_PREFIX);

        assert_eq!(out.keys().collect::<Vec<_>>(), ["title", "elapsedTime"]);
    }

    #[test]
    fn test_only_first_character_is_lowercased() {
        let out = normalize(&decode("kFooMIMEType=x"), "kFoo");
        assert!(out.contains_key("mIMEType"));
    }

    #[test]
    fn test_key_equal_to_prefix_becomes_empty() {
        let out = normalize(&decode("kFoo=1"), "kFoo");
        assert_eq!(out.get(""), Some(&DictValue::Number(1.0)));
    }

    #[test]
    fn test_non_ascii_first_character() {
        let out = normalize(&decode("kFooÉtat=1"), "kFoo");
        assert!(out.contains_key("état"));
    }

    #[test]
    fn test_nested_dictionaries_are_not_normalized() {
        let dict = decode("{kFooOuter={kFooInner=1}}");

        let out = normalize(&dict, "kFoo");

        let nested = out.get("outer").and_then(DictValue::as_dictionary).unwrap();
        assert!(nested.contains_key("kFooInner"));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let dict = decode("kFooBar=1");
        let _ = normalize(&dict, "kFoo");
        assert!(dict.contains_key("kFooBar"));
    }

    #[test]
    fn test_normalizing_twice_is_a_no_op() {
        let once = normalize(&decode("kFooBar=1;kFooBaz={x=1};plain=2"), "kFoo");
        let twice = normalize(&once, "kFoo");
        assert_eq!(once, twice);
        assert_eq!(
            once.keys().collect::<Vec<_>>(),
            twice.keys().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_collision_later_entry_wins() {
        let out = normalize(&decode("bar=1;kFooBar=2"), "kFoo");

        assert_eq!(out.len(), 1);
        assert_eq!(out.get("bar"), Some(&DictValue::Number(2.0)));
    }
}
