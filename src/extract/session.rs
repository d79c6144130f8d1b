//! Graph session — builds the graph representation of one translation unit.
//!
//! The session walks top-level declarations in document order. Every
//! entity goes through its kind's [`IdentityCache`]: a node is allocated and
//! registered before its children are visited, then populated. Children
//! claim their tokens before their parent does, so each token ends up with
//! the innermost node whose range covers it.

use indexmap::IndexSet;
use smol_str::SmolStr;
use tracing::{debug, trace, warn};

use super::cache::IdentityCache;
use super::tokens::TokenQueue;
use super::types::TypeResolver;
use super::{ExtractOptions, claim_tokens, drain_tokens, function_definition};
use crate::base::{SourceRange, Token};
use crate::diagnostics::{Diagnostic, codes};
use crate::frontend::Frontend;
use crate::graph::{
    BlockNode, DeclNode, EnumNode, FunctionNode, GraphExtraction, Node, NodeArena, NodeId,
    RecordNode, StmtNode, TypedefNode,
};
use crate::syntax::{Cfg, CfgError, DeclId, DeclKind, StmtId, TranslationUnit};

pub(crate) struct GraphSession<'a, F: ?Sized> {
    unit: &'a TranslationUnit,
    frontend: &'a F,
    options: &'a ExtractOptions,
    types: TypeResolver<'a>,
    queue: TokenQueue,
    arena: NodeArena,
    decls: IdentityCache<DeclId>,
    stmts: IdentityCache<StmtId>,
    records: IdentityCache<DeclId>,
    enums: IdentityCache<DeclId>,
    typedefs: IdentityCache<DeclId>,
    /// Keyed by owning function and block index.
    blocks: IdentityCache<(DeclId, usize)>,
    functions: Vec<NodeId>,
    top_records: IndexSet<NodeId>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, F: Frontend + ?Sized> GraphSession<'a, F> {
    pub fn new(unit: &'a TranslationUnit, frontend: &'a F, options: &'a ExtractOptions) -> Self {
        Self {
            unit,
            frontend,
            options,
            types: TypeResolver::new(unit),
            queue: TokenQueue::new(),
            arena: NodeArena::new(),
            decls: IdentityCache::new(),
            stmts: IdentityCache::new(),
            records: IdentityCache::new(),
            enums: IdentityCache::new(),
            typedefs: IdentityCache::new(),
            blocks: IdentityCache::new(),
            functions: Vec::new(),
            top_records: IndexSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn run(mut self) -> GraphExtraction {
        for token in self.unit.tokens() {
            self.queue.add_token(token);
        }
        for &decl in self.unit.top_level() {
            self.traverse_decl(decl);
        }

        debug!(
            functions = self.functions.len(),
            records = self.top_records.len(),
            nodes = self.arena.len(),
            diagnostics = self.diagnostics.len(),
            "graph extraction finished"
        );

        GraphExtraction {
            arena: self.arena,
            functions: self.functions,
            records: self.top_records.into_iter().collect(),
            diagnostics: self.diagnostics,
        }
    }

    fn traverse_decl(&mut self, id: DeclId) {
        match &self.unit.decl(id).kind {
            DeclKind::Function { .. } => self.visit_function(id),
            DeclKind::Record { .. } if self.options.visit_records => self.visit_record(id),
            _ => {}
        }
    }

    // ========================================================================
    // FUNCTIONS AND RECORDS
    // ========================================================================

    fn visit_function(&mut self, id: DeclId) {
        let unit = self.unit;
        let decl = unit.decl(id);
        let Some((params, body)) = function_definition(decl) else {
            let drained = drain_tokens(&mut self.queue, &mut self.diagnostics, decl.range, decl.name.as_str());
            trace!(name = decl.name.as_str(), drained, "skipping function without definition");
            return;
        };

        let args = params.iter().map(|&param| self.decl_node(param, true)).collect();
        let entry_stmt = self.stmt_node(body);
        let tokens = self.claim(decl.range, false, decl.name.as_str());
        let cfg_blocks = if self.options.cfg_blocks {
            self.cfg_blocks(id)
        } else {
            Vec::new()
        };

        let node = self.arena.alloc(Node::Function(FunctionNode {
            name: SmolStr::new(decl.name.as_str()),
            ty: decl.ty.map(|ty| unit.ty(ty).spelling.clone()).unwrap_or_default(),
            tokens,
            args,
            entry_stmt,
            cfg_blocks,
        }));
        self.functions.push(node);
    }

    fn visit_record(&mut self, id: DeclId) {
        let target = self.types.record_definition(id);
        let node = self.record_node(target, true);
        self.top_records.insert(node);
    }

    // ========================================================================
    // CANONICAL NODES
    // ========================================================================

    fn stmt_node(&mut self, id: StmtId) -> NodeId {
        if let Some(node) = self.stmts.get(id) {
            return node;
        }

        let stmt = self.unit.stmt(id);
        let node = self.arena.alloc(Node::Stmt(StmtNode {
            name: stmt.class.clone(),
            ..StmtNode::default()
        }));
        self.stmts.insert(id, node);

        let mut ast_relations: Vec<NodeId> =
            stmt.children.iter().map(|&child| self.stmt_node(child)).collect();
        ast_relations.extend(stmt.decls.iter().map(|&decl| self.decl_node(decl, false)));
        let ref_relations: Vec<NodeId> = stmt
            .referenced
            .map(|decl| self.decl_node(decl, false))
            .into_iter()
            .collect();
        let tokens = self.claim(stmt.range, false, stmt.class.as_str());

        if let Node::Stmt(info) = self.arena.get_mut(node) {
            info.ast_relations = ast_relations;
            info.ref_relations = ref_relations;
            info.tokens = tokens;
        }
        node
    }

    fn decl_node(&mut self, id: DeclId, consume_tokens: bool) -> NodeId {
        let unit = self.unit;
        let decl = unit.decl(id);

        if let Some(node) = self.decls.get(id) {
            trace!(name = decl.name.as_str(), consume_tokens, "declaration cache hit");
            if consume_tokens {
                let tokens = self.claim(decl.range, false, decl.name.as_str());
                if let Node::Decl(info) = self.arena.get_mut(node) {
                    info.tokens.extend(tokens);
                }
            }
            return node;
        }

        let node = self.arena.alloc(Node::Decl(DeclNode {
            name: SmolStr::new(decl.name.as_str()),
            kind: decl.kind.name(),
            ..DeclNode::default()
        }));
        self.decls.insert(id, node);

        let name_token = self.queue.get_token_at(decl.location).cloned();
        let mut ty = String::new();
        let mut record_type = None;
        let mut referenced_typedef = None;
        match (&decl.kind, decl.ty) {
            (DeclKind::Typedef { underlying }, _) => {
                ty = unit.ty(*underlying).kind.class_name().to_string();
            }
            (kind, Some(decl_ty)) if kind.is_value() => {
                ty = unit.ty(decl_ty).spelling.clone();
                let types = self.types;
                record_type = types
                    .referenced_record(decl_ty)
                    .map(|record| self.record_node(record, true));
                referenced_typedef = types
                    .referenced_alias(decl_ty)
                    .map(|alias| self.typedef_node(alias, true));
            }
            _ => {}
        }

        let tokens = if consume_tokens {
            self.claim(decl.range, false, decl.name.as_str())
        } else {
            Vec::new()
        };

        if let Node::Decl(info) = self.arena.get_mut(node) {
            info.ty = ty;
            info.tokens = tokens;
            info.name_token = name_token;
            info.record_type = record_type;
            info.referenced_typedef = referenced_typedef;
        }
        node
    }

    fn record_node(&mut self, id: DeclId, consume_tokens: bool) -> NodeId {
        if let Some(node) = self.records.get(id) {
            return node;
        }

        let unit = self.unit;
        let types = self.types;
        let decl = unit.decl(id);
        let node = self.arena.alloc(Node::Record(RecordNode {
            name: SmolStr::new(decl.name.as_str()),
            is_typedef: types.is_typedef_target(id),
            ..RecordNode::default()
        }));
        self.records.insert(id, node);
        trace!(name = decl.name.as_str(), "record registered");

        // Definition tokens may already belong to a referencing declaration.
        let tokens = if consume_tokens {
            self.claim(decl.range, true, decl.name.as_str())
        } else {
            Vec::new()
        };

        let fields: &[DeclId] = match &decl.kind {
            DeclKind::Record { fields, .. } => fields,
            _ => &[],
        };
        let mut referenced_records = Vec::new();
        let mut referenced_enums = Vec::new();
        let mut referenced_typedefs = Vec::new();
        for &field in fields {
            let Some(field_ty) = unit.decl(field).ty else {
                continue;
            };

            if let Some(record) = types.referenced_record(field_ty) {
                referenced_records.push(self.record_node(record, true));
            }
            if let Some(alias) = types.referenced_alias(field_ty) {
                referenced_typedefs.push(self.typedef_node(alias, true));
            }
            if let Some(signature) = types.function_pointer_proto(field_ty) {
                for ty in signature.types() {
                    if let Some(record) = types.referenced_record(ty) {
                        referenced_records.push(self.record_node(record, true));
                    }
                }
            }
            if let Some(enumeration) = types.as_named_enum(field_ty) {
                referenced_enums.push(self.enum_node(enumeration, true));
            }
        }

        if let Node::Record(info) = self.arena.get_mut(node) {
            info.tokens = tokens;
            info.referenced_records = referenced_records;
            info.referenced_enums = referenced_enums;
            info.referenced_typedefs = referenced_typedefs;
        }
        node
    }

    fn enum_node(&mut self, id: DeclId, consume_tokens: bool) -> NodeId {
        if let Some(node) = self.enums.get(id) {
            return node;
        }

        let decl = self.unit.decl(id);
        let node = self.arena.alloc(Node::Enum(EnumNode {
            name: SmolStr::new(decl.name.as_str()),
            ..EnumNode::default()
        }));
        self.enums.insert(id, node);

        if consume_tokens {
            let tokens = self.claim(decl.range, true, decl.name.as_str());
            if let Node::Enum(info) = self.arena.get_mut(node) {
                info.tokens = tokens;
            }
        }
        node
    }

    fn typedef_node(&mut self, id: DeclId, consume_tokens: bool) -> NodeId {
        if let Some(node) = self.typedefs.get(id) {
            return node;
        }

        let unit = self.unit;
        let decl = unit.decl(id);
        let underlying = match &decl.kind {
            DeclKind::Typedef { underlying } => unit.ty(*underlying).spelling.clone(),
            _ => String::new(),
        };
        let node = self.arena.alloc(Node::Typedef(TypedefNode {
            name: SmolStr::new(decl.name.as_str()),
            underlying,
            name_token: self.queue.get_token_at(decl.location).cloned(),
            ..TypedefNode::default()
        }));
        self.typedefs.insert(id, node);

        if consume_tokens {
            let tokens = self.claim(decl.range, true, decl.name.as_str());
            if let Node::Typedef(info) = self.arena.get_mut(node) {
                info.tokens = tokens;
            }
        }
        node
    }

    // ========================================================================
    // CONTROL FLOW
    // ========================================================================

    fn cfg_blocks(&mut self, function: DeclId) -> Vec<NodeId> {
        let unit = self.unit;
        let built = self
            .frontend
            .build_cfg(unit, function)
            .and_then(|cfg| cfg.validate().map(|()| cfg));
        let cfg = match built {
            Ok(cfg) => cfg,
            Err(err) => {
                let code = match err {
                    CfgError::Unsupported(_) => codes::CFG_UNSUPPORTED,
                    CfgError::Malformed(_) => codes::CFG_MALFORMED,
                };
                let decl = unit.decl(function);
                warn!(function = decl.name.as_str(), %err, "skipping control-flow blocks");
                self.diagnostics.push(
                    Diagnostic::warning(code, format!("{}: {}", decl.name.as_str(), err))
                        .with_range(decl.range),
                );
                return Vec::new();
            }
        };

        (0..cfg.blocks.len())
            .map(|index| self.block_node(function, &cfg, index))
            .collect()
    }

    fn block_node(&mut self, function: DeclId, cfg: &Cfg, index: usize) -> NodeId {
        if let Some(node) = self.blocks.get((function, index)) {
            return node;
        }

        let block = &cfg.blocks[index];
        let node = self.arena.alloc(Node::Block(BlockNode {
            name: format!("cfg_{}", block.id),
            ..BlockNode::default()
        }));
        self.blocks.insert((function, index), node);

        let mut statements: Vec<NodeId> =
            block.elements.iter().map(|&stmt| self.stmt_node(stmt)).collect();
        statements.extend(block.terminator.map(|stmt| self.stmt_node(stmt)));
        let successors = block
            .successors
            .iter()
            .flatten()
            .map(|&succ| self.block_node(function, cfg, succ))
            .collect();

        if let Node::Block(info) = self.arena.get_mut(node) {
            info.statements = statements;
            info.successors = successors;
        }
        node
    }

    fn claim(&mut self, range: SourceRange, ignore_consumed: bool, owner: &str) -> Vec<Token> {
        claim_tokens(&mut self.queue, &mut self.diagnostics, range, ignore_consumed, owner)
    }
}
