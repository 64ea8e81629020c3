//! # Inline Parsing
//!
//! Pass-based inline tokenization into flat, typed spans.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of inline-eligible blocks (paragraphs,
//! quotes, list items). Headings and code blocks are never tokenized.
//!
//! Each pass rewrites the span list produced by the previous one and only
//! touches spans still tagged as plain text:
//! 1. `**bold**`
//! 2. `*italic*`
//! 3. `` `code` ``
//! 4. `![alt](url)`
//! 5. `[text](url)`
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `SpanKind`
//! - **`kinds`**: delimiter constants and compiled patterns per inline kind
//! - **`parser`**: `tokenize()` main entry point with the individual `split_nodes_*` passes
//! - **`render`**: `span_to_node()` mapping spans onto HTML leaves
//!
//! ## Precedence
//!
//! Earlier passes win. Link markup inside bold text stays literal, and bold
//! markers inside link text break the link apart.

pub mod kinds;
pub mod parser;
pub mod render;
pub mod types;

pub use parser::{extract_markdown_images, extract_markdown_links, tokenize};
pub use render::{span_to_node, spans_to_nodes};
pub use types::{InlineSpan, SpanKind};
