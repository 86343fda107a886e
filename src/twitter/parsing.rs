//! Text parsing and extraction utilities for tweet content.
//!
//! This module contains the token extractors shared by the extraction and
//! social-graph functions: strict @mentions, lenient @mentions and #hashtags.
//! All returned tokens are lowercased, which is the canonical form used for
//! every comparison, set and map key in the crate.

use once_cell::sync::Lazy;
use regex::Regex;

/// `@` followed by the longest run of username characters.
///
/// The regex engine has no lookbehind, so the left boundary is checked by
/// hand in [`extract_mentions`]. Greediness already guarantees the run is not
/// followed by another username character.
static STRICT_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@([A-Za-z0-9_]+)").expect("Invalid strict mention regex"));

/// `@` followed by word runs optionally joined by single hyphens (`@foo-bar`).
static LENIENT_MENTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*)").expect("Invalid lenient mention regex")
});

static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("Invalid hashtag regex"));

/// Whether `byte` is a character allowed in a Twitter username.
///
/// Non-ASCII characters arrive here as UTF-8 lead or continuation bytes, all
/// of which are >= 0x80 and therefore rejected.
pub(crate) fn is_username_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Whether `name` is a well-formed username (`[A-Za-z0-9_]+`).
pub fn is_valid_username(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_username_byte)
}

/// Extracts username mentions using the strict two-sided boundary rule.
///
/// A mention is `@` plus a run of username characters, where the `@` is not
/// immediately preceded by a username character and the run is not
/// immediately followed by one. An email address such as `bitdiddle@mit.edu`
/// therefore does not mention `mit`.
///
/// # Parameters
///
/// - `text`: The tweet text to scan
///
/// # Returns
///
/// The lowercased usernames in order of appearance. Duplicates are kept;
/// callers collect into a set.
pub fn extract_mentions(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();

    STRICT_MENTION
        .captures_iter(text)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let start = whole.start();
            if start > 0 && is_username_byte(bytes[start - 1]) {
                return None;
            }
            cap.get(1).map(|name| name.as_str().to_ascii_lowercase())
        })
        .collect()
}

/// Extracts mentions with the lenient rule used for follows-graph evidence.
///
/// Any `@` starts a mention, whatever precedes it, and hyphen-joined handles
/// like `@foo-bar` are captured whole.
///
/// # Parameters
///
/// - `text`: The tweet text to scan
///
/// # Returns
///
/// The lowercased handles in order of appearance, duplicates kept.
pub fn extract_lenient_mentions(text: &str) -> Vec<String> {
    LENIENT_MENTION
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

/// Extracts hashtags (`#` plus word characters), lowercased and without the `#`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_mention_boundaries() {
        assert_eq!(extract_mentions("hi @Bob!"), vec!["bob"]);
        assert_eq!(extract_mentions("@alice at start"), vec!["alice"]);
        assert_eq!(extract_mentions("mail bitdiddle@mit.edu"), Vec::<String>::new());
        assert_eq!(extract_mentions("a@b@c"), Vec::<String>::new());
        assert_eq!(extract_mentions("(@carol)"), vec!["carol"]);
        assert_eq!(extract_mentions("@@dave"), vec!["dave"]);
        assert_eq!(extract_mentions("é@eve"), vec!["eve"]);
    }

    #[test]
    fn test_strict_mention_stops_at_hyphen() {
        assert_eq!(extract_mentions("@foo-bar"), vec!["foo"]);
    }

    #[test]
    fn test_lenient_mentions() {
        assert_eq!(extract_lenient_mentions("ping @Foo-Bar now"), vec!["foo-bar"]);
        assert_eq!(extract_lenient_mentions("bob@mit.edu"), vec!["mit"]);
        assert_eq!(extract_lenient_mentions("@a-"), vec!["a"]);
        assert_eq!(extract_lenient_mentions("@x@y"), vec!["x", "y"]);
    }

    #[test]
    fn test_hashtags() {
        assert_eq!(extract_hashtags("#Hype and #rust_lang!"), vec!["hype", "rust_lang"]);
        assert!(extract_hashtags("# not a tag").is_empty());
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("bit_diddle42"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("foo-bar"));
    }
}
