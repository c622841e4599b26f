pub mod card;
pub mod tree_node;

pub use card::{CardContent, WikiLink};
pub use tree_node::TreeNode;
