use std::sync::OnceLock;

use regex::Regex;

/// List item syntax: bullet (`-`, `*`, `+`) or ordered (`1.`) markers.
pub struct ListMarker;

static MARKER_PATTERN: OnceLock<Regex> = OnceLock::new();

impl ListMarker {
    /// Marker followed by at least one whitespace character, then the item text.
    pub const PATTERN: &'static str = r"^(?:[-*+]|\d+\.)\s+(.*)$";

    fn pattern() -> &'static Regex {
        MARKER_PATTERN.get_or_init(|| {
            Regex::new(Self::PATTERN).expect("list marker pattern is a valid regex")
        })
    }

    /// Returns the item text if `line` starts with a list marker.
    ///
    /// Leading indentation is ignored; the returned text is trimmed.
    pub fn strip(line: &str) -> Option<&str> {
        let caps = Self::pattern().captures(line.trim())?;
        caps.get(1).map(|m| m.as_str().trim())
    }

    /// Counts the leading whitespace characters of a raw line.
    ///
    /// Every whitespace character counts as one, tabs included.
    pub fn indentation(line: &str) -> usize {
        line.chars().take_while(|c| c.is_whitespace()).count()
    }
}
