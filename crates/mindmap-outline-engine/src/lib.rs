pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use models::{CardContent, TreeNode, WikiLink};
pub use parsing::{ParseOptions, parse, parse_with};
pub use render::{render_cards, render_outline};
