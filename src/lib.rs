//! # compy-extract
//!
//! Extracts graph and sequence representations of C translation units for
//! program-analysis and learning pipelines.
//!
//! A [`Frontend`] parses source into a [`TranslationUnit`]; an [`Extractor`]
//! walks the unit once and produces either a cross-referenced
//! [`GraphExtraction`] (functions, statements, declarations, records, enums,
//! typedefs, control-flow blocks) or a flat [`SeqExtraction`] (one token list
//! per defined function).
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project        → Corpus loading over source directories
//! interchange    → JSON / YAML sample export (feature `interchange`)
//!   ↓
//! representation → petgraph multigraph, statement statistics
//!   ↓
//! extract        → Extractor, token queue, identity caches, type resolver
//!   ↓
//! graph / seq    → Output models and visitors
//!   ↓
//! frontend       → Parser collaborator contract
//!   ↓
//! syntax         → Translation unit: decls, stmts, types, CFGs
//!   ↓
//! base           → Primitives (Token, SourceRange, TextSize)
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → frontend → graph → extract → project)
// ============================================================================

/// Foundation types: Token, SourceRange, TextSize
pub mod base;

/// Syntax: the translation unit a frontend produces
pub mod syntax;

/// Frontend contract: parsing and CFG construction
pub mod frontend;

/// Entity-local extraction diagnostics
pub mod diagnostics;

/// Graph representation: node arena and visitor
pub mod graph;

/// Sequence representation: per-function token lists
pub mod seq;

/// Extraction sessions and their building blocks
pub mod extract;

/// Downstream representations: typed multigraph, statistics
pub mod representation;

/// Corpus loading: source discovery and per-file extraction
pub mod project;

/// Sample export formats
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{SourceRange, TextSize, Token};

// Re-export the extraction surface
pub use diagnostics::{Diagnostic, Severity};
pub use extract::{ExtractError, ExtractOptions, Extractor};
pub use frontend::{Frontend, FrontendError};
pub use graph::{GraphExtraction, Node, NodeArena, NodeId, Visitor};
pub use seq::{SeqExtraction, SeqFunction, SeqVisitor};
pub use syntax::TranslationUnit;
