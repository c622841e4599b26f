use crate::models::TreeNode;

/// Validates parser output invariants.
///
/// Asserts that every node, at any depth:
/// - has non-empty text
/// - has no leading whitespace on its first line or trailing whitespace on its last
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(forest: &[TreeNode]) {
    let mut pending: Vec<&TreeNode> = forest.iter().collect();
    while let Some(node) = pending.pop() {
        assert!(!node.text.is_empty(), "node with empty text: {node:?}");
        assert_eq!(
            node.text.trim(),
            node.text,
            "node text not trimmed: {:?}",
            node.text
        );
        pending.extend(node.children.iter());
    }
}

/// Asserts the forest holds no more nodes than `markdown` has non-blank lines.
///
/// Holds whenever sentence splitting is off: each node comes from at least one line.
///
/// # Panics
/// Panics if the forest has more nodes than non-blank input lines.
pub fn check_node_bound(markdown: &str, forest: &[TreeNode]) {
    let lines = markdown
        .lines()
        .flat_map(|l| l.split('\r'))
        .filter(|l| !l.trim().is_empty())
        .count();
    let nodes: usize = forest.iter().map(TreeNode::node_count).sum();
    assert!(
        nodes <= lines,
        "{nodes} nodes from {lines} non-blank lines"
    );
}
