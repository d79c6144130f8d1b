//! Sequence representation — one flat token list per defined function.

use smol_str::SmolStr;

use crate::base::Token;
use crate::diagnostics::Diagnostic;

/// A function and every token of its definition, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SeqFunction {
    pub name: SmolStr,
    pub tokens: Vec<Token>,
}

impl SeqFunction {
    /// Token spellings joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sequence output for one translation unit.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct SeqExtraction {
    pub(crate) functions: Vec<SeqFunction>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl SeqExtraction {
    pub fn functions(&self) -> &[SeqFunction] {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&SeqFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn accept<V: SeqVisitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_extraction(self);
        for function in &self.functions {
            visitor.visit_function(function);
            for token in &function.tokens {
                visitor.visit_token(token);
            }
        }
    }
}

/// A consumer of the sequence representation.
pub trait SeqVisitor {
    fn visit_extraction(&mut self, _extraction: &SeqExtraction) {}

    fn visit_function(&mut self, _function: &SeqFunction) {}

    fn visit_token(&mut self, _token: &Token) {}
}
