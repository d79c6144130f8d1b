//! Diagnostics — recovered, entity-local extraction failures.
//!
//! A failure that only affects one entity (a token range that cannot be
//! resolved, a function whose control-flow graph cannot be built) is logged,
//! recorded here, and the entity is emitted in degraded form.

use crate::base::SourceRange;

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic message attached to an extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Diagnostic {
    pub severity: Severity,
    /// Diagnostic code (e.g., "E0101").
    pub code: &'static str,
    pub message: String,
    /// Source range of the affected entity.
    pub range: Option<SourceRange>,
}

impl Diagnostic {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            range: None,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            range: None,
        }
    }

    pub fn with_range(mut self, range: SourceRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Diagnostic codes.
///
/// - **E0101-E0199**: entity-local errors
/// - **W0101-W0199**: degraded output
pub mod codes {
    /// A token range boundary is not an indexed token location.
    pub const TOKEN_LOOKUP: &str = "E0101";
    /// The frontend could not build a control-flow graph.
    pub const CFG_UNSUPPORTED: &str = "W0101";
    /// The frontend built a control-flow graph with dangling edges.
    pub const CFG_MALFORMED: &str = "W0102";
}
