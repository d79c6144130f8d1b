//! Frontend contract — the parser/compiler collaborator.
//!
//! The extractor never reads source text itself. A [`Frontend`] turns a
//! source buffer into a [`TranslationUnit`] and builds control-flow graphs
//! for function bodies on request.

use thiserror::Error;

use crate::syntax::{Cfg, CfgError, DeclId, TranslationUnit};

/// A fatal frontend failure (the source did not parse or compile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("frontend failed: {}", .diagnostics.join("; "))]
pub struct FrontendError {
    /// Diagnostic lines as reported by the frontend.
    pub diagnostics: Vec<String>,
}

impl FrontendError {
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![diagnostic.into()],
        }
    }

    pub fn with_diagnostics(diagnostics: Vec<String>) -> Self {
        Self { diagnostics }
    }
}

/// The parsing frontend an extraction session is driven by.
pub trait Frontend {
    /// Parse one translation unit.
    fn parse(&self, source: &str) -> Result<TranslationUnit, FrontendError>;

    /// Build the control-flow graph of a defined function.
    fn build_cfg(&self, unit: &TranslationUnit, function: DeclId) -> Result<Cfg, CfgError> {
        let _ = (unit, function);
        Err(CfgError::Unsupported(
            "frontend does not build control-flow graphs".to_string(),
        ))
    }
}

impl<F: Frontend + ?Sized> Frontend for &F {
    fn parse(&self, source: &str) -> Result<TranslationUnit, FrontendError> {
        (**self).parse(source)
    }

    fn build_cfg(&self, unit: &TranslationUnit, function: DeclId) -> Result<Cfg, CfgError> {
        (**self).build_cfg(unit, function)
    }
}
