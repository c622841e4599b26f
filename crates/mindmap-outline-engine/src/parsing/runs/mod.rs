//! Run parsers: one grouping algorithm per line class.
//!
//! Each parser starts at the first line of its run, consumes lines for as
//! long as they belong to the run, and reports how many it took so the
//! dispatcher can resume right after them.

pub mod list;
pub mod paragraph;
pub mod quote;

use crate::models::TreeNode;

/// Result of parsing one run.
#[derive(Debug, Default)]
pub struct Run {
    /// Trees built from the run, in document order.
    pub forest: Vec<TreeNode>,
    /// Number of lines consumed, blank lines included.
    pub consumed: usize,
}

pub use list::parse_list_run;
pub use paragraph::parse_paragraph_run;
pub use quote::parse_quote_run;
