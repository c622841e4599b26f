use serde::{Deserialize, Serialize};

/// Tunables for [`parse_with`](super::parse_with).
///
/// Everything defaults to the plain outline behaviour: no sentence
/// splitting and no list continuation lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Break over-long list items into a chain of sentences.
    pub split_long_items: bool,
    /// Word count a list item must exceed before it is split.
    pub long_item_word_limit: usize,
    /// Keep indented plain lines inside a list run as nested items.
    pub list_continuations: bool,
}

impl ParseOptions {
    pub const DEFAULT_WORD_LIMIT: usize = 100;

    /// Whether `text` should be split into a sentence chain under these options.
    pub fn splits(&self, text: &str) -> bool {
        self.split_long_items && text.split_whitespace().count() > self.long_item_word_limit
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            split_long_items: false,
            long_item_word_limit: Self::DEFAULT_WORD_LIMIT,
            list_continuations: false,
        }
    }
}
