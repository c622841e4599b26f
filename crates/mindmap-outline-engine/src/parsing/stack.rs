use crate::models::TreeNode;

/// An open node waiting for its children, tagged with its nesting level.
#[derive(Debug)]
struct Frame {
    level: usize,
    node: TreeNode,
}

/// Level-ordered stack of open nodes used by the list and quote runs.
///
/// Frames own their node; a node is moved into its parent's `children`
/// (or the run's forest when no parent remains) when its frame is popped.
/// Popping happens in document order, so children keep source order and
/// a node is never touched again once closed.
#[derive(Debug, Default)]
pub struct LevelStack {
    frames: Vec<Frame>,
    forest: Vec<TreeNode>,
}

impl LevelStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `node` at `level`.
    ///
    /// Closes every open frame whose level is `>= level`, so the node becomes a
    /// child of the nearest open ancestor with a strictly smaller level, or a
    /// root when there is none. The node then stays open for later children.
    pub fn push(&mut self, level: usize, node: TreeNode) {
        self.push_chain(level, [node]);
    }

    /// Files `nodes` at `level` as a chain: each node becomes the only child
    /// of the one before it, and later deeper nodes nest under the last.
    ///
    /// Closing works as for [`push`](Self::push), once, before the first node.
    pub fn push_chain(&mut self, level: usize, nodes: impl IntoIterator<Item = TreeNode>) {
        while self.frames.last().is_some_and(|f| f.level >= level) {
            self.close_top();
        }
        self.frames
            .extend(nodes.into_iter().map(|node| Frame { level, node }));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.forest.is_empty()
    }

    /// Closes all open frames and returns the finished forest.
    pub fn finish(mut self) -> Vec<TreeNode> {
        while !self.frames.is_empty() {
            self.close_top();
        }
        self.forest
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.frames.pop() {
            match self.frames.last_mut() {
                Some(parent) => parent.node.children.push(frame.node),
                None => self.forest.push(frame.node),
            }
        }
    }
}
