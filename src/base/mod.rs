//! Foundation types for the extractor.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SourceRange`] - Inclusive token-location ranges
//! - [`Token`] - A lexical token with its stream index
//! - [`TextSize`] - Byte offsets identifying token locations
//!
//! This module has NO dependencies on other crate modules.

mod position;
mod token;

pub use position::SourceRange;
pub use token::Token;

// Re-export text-size types for convenience
pub use text_size::{self, TextSize};
