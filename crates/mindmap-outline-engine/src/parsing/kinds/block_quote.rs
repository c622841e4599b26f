/// Blockquote syntax: owns the `>` prefix and how quote depth is read from it.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Reads the quote depth from the start of a line, returning (depth, byte_offset).
    ///
    /// Leading whitespace is skipped. Each `>` may be followed by one space before
    /// the next `>`, so `>`, `> >` and `>>` are all recognised.
    ///
    /// # Returns
    /// - `depth`: Number of `>` prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = s.len() - s.trim_start().len();
        let mut depth = 0usize;

        while i < b.len() && b[i] == (Self::PREFIX as u8) {
            depth += 1;
            i += 1;
            if i < b.len() && b[i] == b' ' {
                i += 1;
            }
        }
        (depth, i)
    }

    /// Quote depth of a line, 0 when it is not a quote line.
    pub fn depth(s: &str) -> usize {
        Self::strip_prefixes(s).0
    }
}
