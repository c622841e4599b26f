//! # Outline Parsing
//!
//! Turns a block of markdown into a forest of [`TreeNode`]s that mirrors its
//! nesting: list indentation, quote depth, and indented paragraph lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    (blank, list item, quote, paragraph) from local facts only
//!
//! 2. **Run Grouping** (`runs`): the dispatcher hands each maximal run of
//!    same-class lines to its run parser, which builds trees with a
//!    `LevelStack` and reports how many lines it consumed
//!
//! ## Modules
//!
//! - **`lines`**: line-ending normalisation and numbered line iteration
//! - **`kinds`**: syntax knowledge per line type (ListMarker, BlockQuote, Paragraph)
//! - **`classify`**: `OutlineLineClassifier` produces `LineClass` for each line
//! - **`stack`**: `LevelStack` files nodes under the nearest shallower ancestor
//! - **`runs`**: list, quote and paragraph run parsers
//! - **`sentences`**: sentence chains for over-long list items
//! - **`options`**: `ParseOptions`
//! - **`snapshot`**: invariant checks used by tests
//!
//! ## Key Invariants
//!
//! - Parsing never fails: unrecognised lines are paragraphs
//! - Output keeps document order; every node is owned by exactly one parent
//! - No state survives between calls

pub mod classify;
pub mod kinds;
pub mod lines;
pub mod options;
pub mod runs;
pub mod sentences;
pub mod snapshot;
pub mod stack;

#[cfg(test)]
mod tests;

use crate::models::TreeNode;

pub use classify::{LineClass, OutlineLineClassifier};
pub use options::ParseOptions;

use lines::{normalize_line_endings, numbered_lines};
use runs::{Run, parse_list_run, parse_paragraph_run, parse_quote_run};

/// Parses markdown into an outline forest with default options.
///
/// Empty or whitespace-only input gives an empty forest.
pub fn parse(markdown: &str) -> Vec<TreeNode> {
    parse_with(markdown, &ParseOptions::default())
}

/// Parses markdown into an outline forest.
pub fn parse_with(markdown: &str, options: &ParseOptions) -> Vec<TreeNode> {
    let text = normalize_line_endings(markdown);
    let lines = classify_all(&text);

    let mut forest = Vec::new();
    let mut pos = 0;

    while pos < lines.len() {
        let rest = &lines[pos..];
        let run: Run = match rest[0] {
            LineClass::Blank => {
                pos += 1;
                continue;
            }
            LineClass::ListItem { .. } => parse_list_run(rest, options),
            LineClass::Quote { .. } => parse_quote_run(rest),
            LineClass::Paragraph { .. } => parse_paragraph_run(rest),
        };

        log::debug!(
            "{} run at line {}: {} lines, {} roots",
            rest[0].label(),
            pos + 1,
            run.consumed,
            run.forest.len()
        );

        forest.extend(run.forest);
        // A run always takes its first line.
        pos += run.consumed.max(1);
    }

    forest
}

/// Classifies every line of already normalised text.
pub(crate) fn classify_all(text: &str) -> Vec<LineClass<'_>> {
    let classifier = OutlineLineClassifier;
    numbered_lines(text)
        .map(|lr| classifier.classify(&lr))
        .collect()
}
