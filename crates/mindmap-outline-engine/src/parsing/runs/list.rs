use crate::{
    models::TreeNode,
    parsing::{classify::LineClass, options::ParseOptions, sentences, stack::LevelStack},
};

use super::Run;

/// Groups a run of list items into trees by indentation.
///
/// Blank lines are skipped without closing any nesting. With
/// `list_continuations` on, an indented plain line is filed like an item at
/// its own indentation. The run ends at the first other line.
pub fn parse_list_run(lines: &[LineClass<'_>], options: &ParseOptions) -> Run {
    let mut stack = LevelStack::new();
    let mut consumed = 0;

    for line in lines {
        match *line {
            LineClass::Blank => {}
            LineClass::ListItem { level, text } => {
                stack.push_chain(level, item_nodes(text, options));
            }
            LineClass::Paragraph { indent, text }
                if options.list_continuations && indent > 0 && !stack.is_empty() =>
            {
                stack.push_chain(indent, item_nodes(text, options));
            }
            _ => break,
        }
        consumed += 1;
    }

    Run {
        forest: stack.finish(),
        consumed,
    }
}

/// One node, or one per sentence when the item is long enough to split.
fn item_nodes(text: &str, options: &ParseOptions) -> Vec<TreeNode> {
    if options.splits(text) {
        sentences::chain_links(text)
            .into_iter()
            .map(TreeNode::new)
            .collect()
    } else {
        vec![TreeNode::new(text)]
    }
}
