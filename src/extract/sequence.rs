//! Sequence session — flat token lists for every defined function.

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::tokens::TokenQueue;
use super::{claim_tokens, drain_tokens, function_definition};
use crate::diagnostics::Diagnostic;
use crate::seq::{SeqExtraction, SeqFunction};
use crate::syntax::{DeclKind, TranslationUnit};

pub(crate) struct SeqSession<'a> {
    unit: &'a TranslationUnit,
    queue: TokenQueue,
    functions: Vec<SeqFunction>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> SeqSession<'a> {
    pub fn new(unit: &'a TranslationUnit) -> Self {
        Self {
            unit,
            queue: TokenQueue::new(),
            functions: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn run(mut self) -> SeqExtraction {
        let unit = self.unit;
        for token in unit.tokens() {
            self.queue.add_token(token);
        }

        for &id in unit.top_level() {
            let decl = unit.decl(id);
            if !matches!(decl.kind, DeclKind::Function { .. }) {
                continue;
            }
            let name = decl.name.as_str();
            if function_definition(decl).is_none() {
                let drained = drain_tokens(&mut self.queue, &mut self.diagnostics, decl.range, name);
                trace!(name, drained, "skipping function without definition");
                continue;
            }

            let tokens = claim_tokens(&mut self.queue, &mut self.diagnostics, decl.range, false, name);
            self.functions.push(SeqFunction {
                name: SmolStr::new(name),
                tokens,
            });
        }

        debug!(
            functions = self.functions.len(),
            diagnostics = self.diagnostics.len(),
            "sequence extraction finished"
        );
        SeqExtraction {
            functions: self.functions,
            diagnostics: self.diagnostics,
        }
    }
}
