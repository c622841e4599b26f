use serde::{Deserialize, Serialize};

use super::card::CardContent;

/// A node in a parsed outline forest.
///
/// Nodes own their children outright: there are no parent back-pointers,
/// so a forest is always a plain `Vec<TreeNode>` of independent trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node content. For quotes this may span several lines, each keeping its `>` prefix.
    pub text: String,
    /// Nested nodes in document order. Empty for a leaf.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Height of this subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// How the host should present this node as a card.
    #[must_use]
    pub fn card(&self) -> CardContent {
        CardContent::from_text(&self.text)
    }
}

// Unlinks descendants onto a work list so dropping a deep chain never recurses.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
