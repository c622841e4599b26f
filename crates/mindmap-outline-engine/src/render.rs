//! Plain-text views of an outline forest.

use crate::models::TreeNode;

const INDENT: &str = "  ";
const BULLET: &str = "- ";

/// Renders a forest as an indented bullet outline.
///
/// Multi-line node text continues under the first character after the
/// bullet. Lines are joined with `\n` and there is no trailing newline.
pub fn render_outline(forest: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    walk(forest, |node, depth| {
        let indent = INDENT.repeat(depth);
        for (i, line) in node.text.split('\n').enumerate() {
            let lead = if i == 0 { BULLET } else { INDENT };
            lines.push(format!("{indent}{lead}{line}"));
        }
    });
    lines.join("\n")
}

/// Renders one line per node showing how it would become a card.
///
/// Multi-line text is shown with escaped newlines so each card stays on one line.
pub fn render_cards(forest: &[TreeNode]) -> String {
    let mut lines = Vec::new();
    walk(forest, |node, depth| {
        let card = node.card().to_string().replace('\n', "\\n");
        lines.push(format!("{}{card}", INDENT.repeat(depth)));
    });
    lines.join("\n")
}

/// Visits every node in document order (pre-order) with its depth.
fn walk(forest: &[TreeNode], mut visit: impl FnMut(&TreeNode, usize)) {
    let mut pending: Vec<(&TreeNode, usize)> = forest.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = pending.pop() {
        visit(node, depth);
        pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
}
