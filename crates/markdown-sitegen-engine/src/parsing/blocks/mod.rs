//! # Block Parsing
//!
//! Flat, one-level block model: a document is a sequence of blank-line
//! separated blocks, each with exactly one kind.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): split on `"\n\n"`, trim, drop empty blocks
//! 2. **Classification** (`classify`): `MarkdownBlockClassifier` picks a `BlockKind`
//!    by fixed precedence
//! 3. **Compilation** (`compile`): each kind has its own block-to-node function;
//!    inline-eligible kinds go through the inline tokenizer
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`, `BlockNode`
//! - **`kinds`**: block-specific types with owned delimiters (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `MarkdownBlockClassifier`
//! - **`compile`**: `compile` dispatch and the `block_to_*` builders
//!
//! ## Key Invariants
//!
//! - Blocks never overlap and keep source order
//! - No nesting: a list cannot contain a quote, a quote cannot contain a list
//! - Code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod compile;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::{MarkdownBlockClassifier, classify};
pub use compile::{compile, compile_node};
pub use segment::markdown_to_blocks;
pub use types::{BlockKind, BlockNode};
