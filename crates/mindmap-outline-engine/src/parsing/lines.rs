use std::borrow::Cow;

/// A single physical line of the input with its 1-based line number.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// Rewrites `\r\n` and lone `\r` terminators as `\n`.
///
/// Borrows the input unchanged when it contains no carriage returns.
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

/// Returns an iterator over the `\n`-separated lines of already normalized text.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n')
        .enumerate()
        .map(|(i, text)| LineRef { number: i + 1, text })
}
