//! # Snapshot Testing Support
//!
//! Utilities for testing the parser with invariant checks and `insta`
//! snapshots of the rendered outline (see [`crate::render`]).
//!
//! ## Modules
//!
//! - **`invariants`**: runtime checks for parser output (node text is
//!   non-empty and trimmed, node counts bounded by the input)

pub mod invariants;

pub use invariants::check as invariants;
pub use invariants::check_node_bound;
