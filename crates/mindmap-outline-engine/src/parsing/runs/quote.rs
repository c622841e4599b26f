use crate::{
    models::TreeNode,
    parsing::{classify::LineClass, stack::LevelStack},
};

use super::Run;

/// Quote lines at one depth waiting to be filed as a single node.
#[derive(Debug)]
struct QuoteBlock<'a> {
    depth: usize,
    lines: Vec<&'a str>,
}

/// Accumulates same-depth quote lines into blocks and files each block on a
/// [`LevelStack`] keyed by quote depth.
struct QuoteRunBuilder<'a> {
    stack: LevelStack,
    block: Option<QuoteBlock<'a>>,
}

impl<'a> QuoteRunBuilder<'a> {
    fn new() -> Self {
        Self {
            stack: LevelStack::new(),
            block: None,
        }
    }

    fn push_quote(&mut self, depth: usize, text: &'a str) {
        match self.block.as_mut() {
            Some(block) if block.depth == depth => block.lines.push(text),
            _ => {
                self.flush_block();
                self.block = Some(QuoteBlock {
                    depth,
                    lines: vec![text],
                });
            }
        }
    }

    /// Files the accumulated block, leaving the stack as it is.
    fn flush_block(&mut self) {
        if let Some(block) = self.block.take() {
            self.stack
                .push(block.depth, TreeNode::new(block.lines.join("\n")));
        }
    }

    fn finish(mut self) -> Vec<TreeNode> {
        // EOF flush
        self.flush_block();
        self.stack.finish()
    }
}

/// Groups a run of quote lines into trees by `>` depth.
///
/// Consecutive lines at the same depth form one node whose text keeps every
/// line's prefixes. A blank line ends the current block but keeps the nesting
/// built so far. The run ends at the first non-blank, non-quote line.
pub fn parse_quote_run(lines: &[LineClass<'_>]) -> Run {
    let mut builder = QuoteRunBuilder::new();
    let mut consumed = 0;

    for line in lines {
        match *line {
            LineClass::Blank => builder.flush_block(),
            LineClass::Quote { depth, text } => builder.push_quote(depth, text),
            _ => break,
        }
        consumed += 1;
    }

    Run {
        forest: builder.finish(),
        consumed,
    }
}
