//! Label-key syntax helpers.
//!
//! # Design
//! - Every rule is an independent boolean so the editor reports them separately.
//! - Checks never fail; malformed input simply reads as `false`.
//! - A key is "prefixed" when it contains any `/`; the split point is the first one.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum prefix length in characters (DNS subdomain bound).
pub const MAX_PREFIX_LEN: usize = 253;
/// Maximum name length in characters (DNS label bound).
pub const MAX_NAME_LEN: usize = 63;

static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$")
        .expect("prefix pattern compiles")
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9_.-]*[A-Za-z0-9])?$").expect("name pattern compiles")
});

/// Split a label key into its optional prefix and its name part.
#[must_use]
pub fn split_key(key: &str) -> (Option<&str>, &str) {
    key.split_once('/')
        .map_or((None, key), |(prefix, name)| (Some(prefix), name))
}

/// The prefix part is a lowercase DNS subdomain. Keys without `/` always pass.
#[must_use]
pub fn prefix_pattern_ok(key: &str) -> bool {
    split_key(key)
        .0
        .is_none_or(|prefix| PREFIX_RE.is_match(prefix))
}

/// The name part is empty or alphanumerics with `-`, `_`, `.` between alphanumeric ends.
#[must_use]
pub fn name_pattern_ok(key: &str) -> bool {
    let (_, name) = split_key(key);
    name.is_empty() || NAME_RE.is_match(name)
}

/// The prefix part (empty without `/`) stays within [`MAX_PREFIX_LEN`].
#[must_use]
pub fn prefix_length_ok(key: &str) -> bool {
    split_key(key).0.unwrap_or("").chars().count() <= MAX_PREFIX_LEN
}

/// The name part (the whole key without `/`) stays within [`MAX_NAME_LEN`].
#[must_use]
pub fn name_length_ok(key: &str) -> bool {
    split_key(key).1.chars().count() <= MAX_NAME_LEN
}

/// A key is unique while at most one row carries it; empty keys never collide.
///
/// `keys` must include the checked row's own key: uniqueness is an occurrence
/// count over the whole list, and a count of one never trips the flag.
#[must_use]
pub fn key_is_unique<'a>(key: &str, keys: impl Iterator<Item = &'a str>) -> bool {
    if key.is_empty() {
        return true;
    }
    keys.filter(|candidate| *candidate == key).count() <= 1
}

#[cfg(test)]
mod tests {
    use super::{
        MAX_NAME_LEN, MAX_PREFIX_LEN, key_is_unique, name_length_ok, name_pattern_ok,
        prefix_length_ok, prefix_pattern_ok, split_key,
    };

    #[test]
    fn keys_without_slash_always_pass_the_prefix_rule() {
        assert!(prefix_pattern_ok("name"));
        assert!(prefix_pattern_ok("NAME$"));
        assert!(prefix_pattern_ok(""));
    }

    #[test]
    fn dns_subdomain_prefixes_are_accepted() {
        assert!(prefix_pattern_ok("my.domain.com/name"));
        assert!(prefix_pattern_ok("a/name"));
        assert!(prefix_pattern_ok("a-1.b-2/name"));
    }

    #[test]
    fn malformed_prefixes_are_rejected() {
        assert!(!prefix_pattern_ok("BAD_PREFIX/name"));
        assert!(!prefix_pattern_ok("-leading/name"));
        assert!(!prefix_pattern_ok("trailing-/name"));
        assert!(!prefix_pattern_ok("double..dot/name"));
        assert!(!prefix_pattern_ok("/name"));
    }

    #[test]
    fn names_allow_midfield_punctuation_only() {
        assert!(name_pattern_ok("name"));
        assert!(name_pattern_ok("my.domain.com/name"));
        assert!(name_pattern_ok("Name-1_b.c"));
        assert!(name_pattern_ok("example.com/"));
        assert!(name_pattern_ok(""));
        assert!(!name_pattern_ok("name$"));
        assert!(!name_pattern_ok("-name"));
        assert!(!name_pattern_ok("name-"));
        assert!(!name_pattern_ok("pre/fix/name"));
    }

    #[test]
    fn prefix_length_boundary_sits_at_253() {
        let prefix = "a".repeat(MAX_PREFIX_LEN);
        assert!(prefix_length_ok(&format!("{prefix}/name")));
        let long = "a".repeat(MAX_PREFIX_LEN + 1);
        assert!(!prefix_length_ok(&format!("{long}/name")));
        assert!(prefix_length_ok("name"));
    }

    #[test]
    fn name_length_boundary_sits_at_63() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert!(name_length_ok(&name));
        assert!(name_length_ok(&format!("example.com/{name}")));
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(!name_length_ok(&long));
    }

    #[test]
    fn uniqueness_counts_occurrences_including_self() {
        let keys = ["a", "a", ""];
        assert!(!key_is_unique("a", keys.iter().copied()));
        assert!(key_is_unique("", keys.iter().copied()));
        let distinct = ["a", "b"];
        assert!(key_is_unique("a", distinct.iter().copied()));
        assert!(key_is_unique("b", distinct.iter().copied()));
    }

    #[test]
    fn split_takes_the_first_slash() {
        assert_eq!(split_key("a/b/c"), (Some("a"), "b/c"));
        assert_eq!(split_key("name"), (None, "name"));
        assert_eq!(split_key("/name"), (Some(""), "name"));
    }
}
