//! Sentence splitting for over-long list items.
//!
//! Long captured text is drilled down into readable increments: the first
//! sentence becomes the node, and each following sentence hangs off the one
//! before it as its only child. Items nested under a split item hang off the
//! last sentence, so every link keeps a single child.
//!
//! A chain holds at most [`MAX_CHAIN_LEN`] links. Text past that stays
//! together in the last link, which keeps output trees shallow enough for
//! recursive consumers such as `serde_json`.

/// Most links a sentence chain may have.
pub const MAX_CHAIN_LEN: usize = 256;

/// Splits `text` immediately after every `.`, trimming pieces and dropping empty ones.
///
/// Text without a full stop comes back as a single piece.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_pieces(text).map(|(_, sentence)| sentence).collect()
}

/// Texts of the chain built from `text`, head first.
///
/// Text with no sentences at all gives one trimmed link.
pub fn chain_links(text: &str) -> Vec<&str> {
    let pieces: Vec<(usize, &str)> = sentence_pieces(text).collect();
    if pieces.is_empty() {
        return vec![text.trim()];
    }

    let mut links: Vec<&str> = pieces
        .iter()
        .take(MAX_CHAIN_LEN)
        .map(|&(_, sentence)| sentence)
        .collect();
    if pieces.len() > MAX_CHAIN_LEN {
        let (start, _) = pieces[MAX_CHAIN_LEN - 1];
        links[MAX_CHAIN_LEN - 1] = text[start..].trim();
    }
    links
}

/// Non-empty trimmed sentences with the byte offset of their raw piece.
fn sentence_pieces(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    text.split_inclusive('.').filter_map(move |raw| {
        let start = offset;
        offset += raw.len();
        let sentence = raw.trim();
        (!sentence.is_empty()).then_some((start, sentence))
    })
}
