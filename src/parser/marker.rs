//! Toolbox line classification.

use regex::Regex;
use std::sync::LazyLock;

// A backslash marker, one space, then the content.
static RE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\([A-Za-z]+) (.*)$").unwrap());

/// The role of a Toolbox line, from its leading marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `\tx` — a line of text.
    Text,
    /// `\vs` — a verse number or the `(section title)` flag.
    Verse,
    /// `\c`, `\ref`, `\t` — recognised and ignored.
    Ignored,
    /// Anything else; carries the marker name without the backslash.
    Unrecognized(String),
}

impl Marker {
    fn from_name(name: &str) -> Self {
        match name {
            "tx" => Marker::Text,
            "vs" => Marker::Verse,
            "c" | "ref" | "t" => Marker::Ignored,
            other => Marker::Unrecognized(other.to_string()),
        }
    }
}

/// A well-formed line split into marker and content.
#[derive(Debug, PartialEq, Eq)]
pub struct Line<'a> {
    pub marker: Marker,
    pub content: &'a str,
}

/// Split a line, or `None` if it does not look like `\marker content`.
pub fn classify(line: &str) -> Option<Line<'_>> {
    let caps = RE_LINE.captures(line)?;
    let name = caps.get(1)?.as_str();
    let content = caps.get(2)?.as_str();
    Some(Line {
        marker: Marker::from_name(name),
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_markers() {
        let line = classify("\\tx In the beginning").unwrap();
        assert_eq!(line.marker, Marker::Text);
        assert_eq!(line.content, "In the beginning");

        assert_eq!(classify("\\vs 3").unwrap().marker, Marker::Verse);
        assert_eq!(classify("\\c 1").unwrap().marker, Marker::Ignored);
        assert_eq!(classify("\\ref GEN 1.1").unwrap().marker, Marker::Ignored);
        assert_eq!(classify("\\t word").unwrap().marker, Marker::Ignored);
    }

    #[test]
    fn unknown_marker_keeps_name() {
        let line = classify("\\mb morpheme").unwrap();
        assert_eq!(line.marker, Marker::Unrecognized("mb".to_string()));
    }

    #[test]
    fn malformed_lines() {
        assert!(classify("plain text").is_none());
        assert!(classify("\\tx").is_none());
        assert!(classify("\\1x text").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn empty_content_after_space_is_allowed() {
        let line = classify("\\tx ").unwrap();
        assert_eq!(line.content, "");
    }
}
