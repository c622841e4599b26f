use std::fmt;

use serde::{Deserialize, Serialize};

/// Wikilink delimiters recognised when deciding a node's card type.
pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static str = "[[";
    pub const CLOSE: &'static str = "]]";
    /// Extension appended to a link target to name the referenced note.
    pub const NOTE_EXTENSION: &'static str = ".md";

    /// Returns the link target if `text` is exactly one `[[target]]` wikilink.
    ///
    /// Surrounding whitespace is ignored; an empty target is not a link.
    pub fn target(text: &str) -> Option<&str> {
        let inner = text
            .trim()
            .strip_prefix(Self::OPEN)?
            .strip_suffix(Self::CLOSE)?;
        if inner.is_empty() || inner.contains(Self::CLOSE) {
            return None;
        }
        Some(inner)
    }
}

/// What a host should create for a node: a text card or a card embedding a note file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardContent {
    Text { text: String },
    File { path: String },
}

impl CardContent {
    pub fn from_text(text: &str) -> Self {
        match WikiLink::target(text) {
            Some(target) => CardContent::File {
                path: format!("{target}{}", WikiLink::NOTE_EXTENSION),
            },
            None => CardContent::Text {
                text: text.to_string(),
            },
        }
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, CardContent::File { .. })
    }
}

impl fmt::Display for CardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardContent::Text { text } => write!(f, "text: {text}"),
            CardContent::File { path } => write!(f, "file: {path}"),
        }
    }
}
