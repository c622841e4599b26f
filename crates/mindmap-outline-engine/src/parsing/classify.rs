use super::{
    kinds::{BlockQuote, ListMarker},
    lines::LineRef,
};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of outline parsing: each line is classified independently
/// without reference to surrounding context. Text borrows from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only. Separates blocks.
    Blank,
    /// A bulleted or ordered list item.
    ListItem {
        /// Leading whitespace count of the raw line.
        level: usize,
        /// Item text with the marker stripped.
        text: &'a str,
    },
    /// A blockquote line.
    Quote {
        /// Number of `>` prefixes.
        depth: usize,
        /// The trimmed line, prefixes retained.
        text: &'a str,
    },
    /// Any other line.
    Paragraph {
        /// Leading whitespace count of the raw line.
        indent: usize,
        /// The trimmed line.
        text: &'a str,
    },
}

impl LineClass<'_> {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, LineClass::Blank)
    }

    /// Short label used in trace logs.
    pub fn label(&self) -> &'static str {
        match self {
            LineClass::Blank => "blank",
            LineClass::ListItem { .. } => "list",
            LineClass::Quote { .. } => "quote",
            LineClass::Paragraph { .. } => "paragraph",
        }
    }
}

/// Classifies individual lines for the outline parser.
pub struct OutlineLineClassifier;

impl OutlineLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Priority: blank, list item, quote, paragraph. Every line lands in one class.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.text.trim();

        let class = if trimmed.is_empty() {
            LineClass::Blank
        } else if let Some(text) = ListMarker::strip(lr.text) {
            LineClass::ListItem {
                level: ListMarker::indentation(lr.text),
                text,
            }
        } else {
            match BlockQuote::depth(trimmed) {
                0 => LineClass::Paragraph {
                    indent: ListMarker::indentation(lr.text),
                    text: trimmed,
                },
                depth => LineClass::Quote {
                    depth,
                    text: trimmed,
                },
            }
        };

        log::trace!("line {}: {}", lr.number, class.label());
        class
    }
}
