pub mod block_quote;
pub mod list_marker;
pub mod paragraph;

pub use block_quote::BlockQuote;
pub use list_marker::ListMarker;
pub use paragraph::Paragraph;
