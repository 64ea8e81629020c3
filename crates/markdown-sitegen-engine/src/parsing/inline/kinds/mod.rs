//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: bold, italic and code delimiters with their fixed pass order
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, never preceded by `!`
//!
//! The parser calls these; it never hardcodes `**` or `](`.

pub mod emphasis;
pub mod image_link;

pub use emphasis::Emphasis;
pub use image_link::{Image, Link};
