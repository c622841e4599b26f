// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline_content(size: usize) -> String {
    let base = "Intro paragraph\n  with an indented detail\n\n- Bullet point\n  - Nested item\n    - Deeper item\n- Another item\n\n> A quote\n> over two lines\n> > with a reply\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_list(depth: usize) -> String {
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(&format!("{}- Level {}\n", "  ".repeat(level), level));
    }
    for level in (0..depth).rev() {
        content.push_str(&format!("{}- Back at {}\n", "  ".repeat(level), level));
    }
    content
}

#[allow(dead_code)]
pub fn generate_long_item(sentences: usize) -> String {
    format!(
        "- {}",
        "This sentence is long enough to count toward the limit. ".repeat(sentences)
    )
}
