//! Extraction — turns a parsed translation unit into graph or sequence form.
//!
//! ## Key Types
//!
//! - [`Extractor`] — facade over a [`Frontend`]; one session per unit
//! - [`ExtractOptions`] — which optional parts of the graph to build
//! - [`TokenQueue`] — exclusive, range-based token consumption
//! - [`IdentityCache`] — one canonical node per source entity
//! - [`TypeResolver`] — looks through pointers and type sugar
//!
//! Sessions never share state: every call builds a fresh queue, fresh
//! caches and a fresh arena, so extractions of different units may run in
//! parallel (see [`Extractor::graphs_from_strings`]).

mod cache;
mod sequence;
mod session;
mod tokens;
mod types;

pub use cache::IdentityCache;
pub use tokens::{TokenLookupError, TokenQueue};
pub use types::{ProtoSignature, TypeResolver};

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::base::{SourceRange, Token};
use crate::diagnostics::{Diagnostic, codes};
use crate::frontend::{Frontend, FrontendError};
use crate::graph::GraphExtraction;
use crate::seq::SeqExtraction;
use crate::syntax::{Decl, DeclId, DeclKind, StmtId, TranslationUnit};

use self::sequence::SeqSession;
use self::session::GraphSession;

/// Errors that abort an extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The frontend rejected the source.
    #[error("Frontend error: {0}")]
    Frontend(#[from] FrontendError),
}

/// Optional parts of the graph representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Canonicalize top-level record declarations and list them in
    /// [`GraphExtraction::records`].
    pub visit_records: bool,
    /// Attach control-flow blocks to every function node.
    pub cfg_blocks: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            visit_records: true,
            cfg_blocks: false,
        }
    }
}

impl ExtractOptions {
    pub fn with_visit_records(mut self, enabled: bool) -> Self {
        self.visit_records = enabled;
        self
    }

    pub fn with_cfg_blocks(mut self, enabled: bool) -> Self {
        self.cfg_blocks = enabled;
        self
    }
}

/// Runs extraction sessions against a frontend.
#[derive(Debug, Clone)]
pub struct Extractor<F> {
    frontend: F,
    options: ExtractOptions,
}

impl<F: Frontend> Extractor<F> {
    pub fn new(frontend: F) -> Self {
        Self::with_options(frontend, ExtractOptions::default())
    }

    pub fn with_options(frontend: F, options: ExtractOptions) -> Self {
        Self { frontend, options }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parse `source` and build its graph representation.
    pub fn graph_from_string(&self, source: &str) -> Result<GraphExtraction, ExtractError> {
        let unit = self.parse(source)?;
        Ok(self.graph_from_unit(&unit))
    }

    /// Build the graph representation of an already parsed unit.
    pub fn graph_from_unit(&self, unit: &TranslationUnit) -> GraphExtraction {
        GraphSession::new(unit, &self.frontend, &self.options).run()
    }

    /// Parse `source` and build its sequence representation.
    pub fn seq_from_string(&self, source: &str) -> Result<SeqExtraction, ExtractError> {
        let unit = self.parse(source)?;
        Ok(self.seq_from_unit(&unit))
    }

    pub fn seq_from_unit(&self, unit: &TranslationUnit) -> SeqExtraction {
        SeqSession::new(unit).run()
    }

    /// Extract several independent sources in parallel. Results keep the
    /// order of `sources`; one failing source does not affect the others.
    pub fn graphs_from_strings<S>(&self, sources: &[S]) -> Vec<Result<GraphExtraction, ExtractError>>
    where
        F: Sync,
        S: AsRef<str> + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.graph_from_string(source.as_ref()))
            .collect()
    }

    pub fn seqs_from_strings<S>(&self, sources: &[S]) -> Vec<Result<SeqExtraction, ExtractError>>
    where
        F: Sync,
        S: AsRef<str> + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.seq_from_string(source.as_ref()))
            .collect()
    }

    fn parse(&self, source: &str) -> Result<TranslationUnit, ExtractError> {
        debug!(bytes = source.len(), "parsing translation unit");
        self.frontend.parse(source).map_err(|err| {
            warn!(%err, "frontend rejected translation unit");
            ExtractError::from(err)
        })
    }
}

// ============================================================================
// SHARED SESSION HELPERS
// ============================================================================

/// Parameters and body of a function that gets a node. Functions without a
/// body, or whose name is not a plain identifier, are skipped.
pub(crate) fn function_definition(decl: &Decl) -> Option<(&[DeclId], StmtId)> {
    match &decl.kind {
        DeclKind::Function {
            params,
            body: Some(body),
        } if decl.name.is_identifier() => Some((params.as_slice(), *body)),
        _ => None,
    }
}

/// Pop the tokens of `range`, recording a diagnostic if the range cannot
/// be resolved. The owning entity then gets no tokens.
pub(crate) fn claim_tokens(
    queue: &mut TokenQueue,
    diagnostics: &mut Vec<Diagnostic>,
    range: SourceRange,
    ignore_consumed: bool,
    owner: &str,
) -> Vec<Token> {
    match queue.pop_tokens_for_range(range, ignore_consumed) {
        Ok(tokens) => tokens,
        Err(err) => {
            report_lookup(diagnostics, range, owner, err);
            Vec::new()
        }
    }
}

/// Consume the tokens of `range` without assigning them anywhere.
pub(crate) fn drain_tokens(
    queue: &mut TokenQueue,
    diagnostics: &mut Vec<Diagnostic>,
    range: SourceRange,
    owner: &str,
) -> usize {
    match queue.discard_range(range) {
        Ok(drained) => drained,
        Err(err) => {
            report_lookup(diagnostics, range, owner, err);
            0
        }
    }
}

fn report_lookup(
    diagnostics: &mut Vec<Diagnostic>,
    range: SourceRange,
    owner: &str,
    err: TokenLookupError,
) {
    warn!(owner, %range, %err, "token range lookup failed");
    diagnostics.push(
        Diagnostic::error(codes::TOKEN_LOOKUP, format!("`{}`: {}", owner, err)).with_range(range),
    );
}
