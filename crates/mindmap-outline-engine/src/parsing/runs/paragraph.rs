use crate::{
    models::TreeNode,
    parsing::{classify::LineClass, kinds::Paragraph},
};

use super::Run;

/// Turns a run of plain lines into nodes, one per line.
///
/// An unindented line starts a new root. Indented lines become flat children
/// of the latest root; with no root yet they stand as roots themselves. The
/// run ends at the first list or quote line.
pub fn parse_paragraph_run(lines: &[LineClass<'_>]) -> Run {
    let mut forest: Vec<TreeNode> = Vec::new();
    let mut current_root: Option<usize> = None;
    let mut consumed = 0;

    for line in lines {
        match *line {
            LineClass::Blank => {}
            LineClass::Paragraph { indent, text } => {
                let node = TreeNode::new(text);
                if Paragraph::starts_root(indent) {
                    current_root = Some(forest.len());
                    forest.push(node);
                } else if let Some(root) = current_root
                    && let Some(parent) = forest.get_mut(root)
                {
                    parent.children.push(node);
                } else {
                    forest.push(node);
                }
            }
            _ => break,
        }
        consumed += 1;
    }

    Run { forest, consumed }
}
