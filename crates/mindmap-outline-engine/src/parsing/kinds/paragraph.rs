/// Paragraph line type (marker struct).
///
/// Paragraphs have no delimiters: any non-blank line that is neither a
/// list item nor a quote line. Only the line's indentation matters for
/// nesting, and only one level deep.
pub struct Paragraph;

impl Paragraph {
    /// Whether a paragraph line at `indent` starts a new root paragraph.
    pub fn starts_root(indent: usize) -> bool {
        indent == 0
    }
}
