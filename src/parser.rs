//! Property path parsing.
//!
//! A path is a list of field names joined by any of `.`, `,`, `|` or `&`.
//! Each name may be followed by one or more `[]` markers, each of which turns
//! the preceding part into an array fan-out step. A delimiter or marker
//! directly preceded by a backslash is part of the name, so `a\.b` names the
//! single field `a.b` and `a\[\]` names the field `a[]`.
//!
//! ```text
//! user.address.postalCode    -> object(user), object(address), literal(postalCode)
//! roles[].name               -> array(roles), literal(name)
//! [].id                      -> root, array(""), literal(id)
//! ```
//!
//! Parsing never fails. Paths that make no sense for a document are rejected
//! later, when they are resolved against it.

use std::sync::LazyLock;

use regex::Regex;

use crate::segment::{Path, PathSegment, SegmentKind};

static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,|&]").expect("delimiter pattern is valid"));

static ARRAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\]").expect("array marker pattern is valid"));

/// Characters whose escaping backslash is dropped from segment names
const ESCAPABLE: &[char] = &['.', ',', '|', '&', '[', ']'];

/// Parse a property path into segments.
///
/// # Examples
///
/// ```
/// use propmap::{parse, SegmentKind};
///
/// let path = parse("roles[].name");
/// assert_eq!(path.len(), 2);
/// assert_eq!(path[0].name(), "roles");
/// assert_eq!(path[0].kind(), SegmentKind::ArrayStep);
/// assert_eq!(path[1].name(), "name");
/// assert_eq!(path[1].kind(), SegmentKind::Literal);
/// ```
pub fn parse(path: &str) -> Path {
    let tokens = split_unescaped(path, &DELIMITER);
    let count = tokens.len();
    let mut segments = Vec::with_capacity(count);

    for (i, token) in tokens.into_iter().enumerate() {
        let kind = if i + 1 < count {
            SegmentKind::ObjectStep
        } else {
            SegmentKind::Literal
        };

        let parts = split_unescaped(token, &ARRAY_MARKER);

        if parts.len() == 1 {
            segments.push(PathSegment::new(unescape(token), kind));
            continue;
        }

        // "[]..." walks the document itself
        if i == 0 && parts[0].is_empty() {
            segments.push(PathSegment::root());
        }

        // one step per marker, named after the part before it; the tail is dropped
        segments.extend(
            parts[..parts.len() - 1]
                .iter()
                .map(|part| PathSegment::new(unescape(part), SegmentKind::ArrayStep)),
        );
    }

    segments
}

/// Split `input` at every match of `pattern` not directly preceded by a backslash.
fn split_unescaped<'a>(input: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for m in pattern.find_iter(input) {
        if input[..m.start()].ends_with('\\') {
            continue;
        }
        parts.push(&input[start..m.start()]);
        start = m.end();
    }
    parts.push(&input[start..]);

    parts
}

fn unescape(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('\\', Some(next)) if ESCAPABLE.contains(next) => {
                result.push(*next);
                chars.next();
            }
            _ => result.push(ch),
        }
    }

    result
}

#[test]
fn test_split_skips_escaped_delimiters() {
    assert_eq!(split_unescaped(r"a\.b.c", &DELIMITER), vec![r"a\.b", "c"]);
    assert_eq!(split_unescaped("a,b|c&d", &DELIMITER), vec!["a", "b", "c", "d"]);
    assert_eq!(split_unescaped("", &DELIMITER), vec![""]);
}

#[test]
fn test_split_any_backslash_suppresses_delimiter() {
    assert_eq!(split_unescaped(r"a\\.b", &DELIMITER), vec![r"a\\.b"]);
    assert_eq!(split_unescaped(r"a\\[].b", &ARRAY_MARKER), vec![r"a\\[].b"]);
}

#[test]
fn test_split_array_markers() {
    assert_eq!(split_unescaped("[][][]", &ARRAY_MARKER), vec!["", "", "", ""]);
    assert_eq!(split_unescaped(r"a\[\][]", &ARRAY_MARKER), vec![r"a\[\]", ""]);
    assert_eq!(split_unescaped(r"a\[][]", &ARRAY_MARKER), vec![r"a\[]", ""]);
}

#[test]
fn test_unescape() {
    assert_eq!(unescape(r"a\.b"), "a.b");
    assert_eq!(unescape(r"x\[\]"), "x[]");
    assert_eq!(unescape(r"a\\b"), r"a\\b");
    assert_eq!(unescape(r"a\\.b"), r"a\.b");
    assert_eq!(unescape(r"a\nb"), r"a\nb");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}
