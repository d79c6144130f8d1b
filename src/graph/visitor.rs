//! Visitor dispatch over the heterogeneous node set.
//!
//! [`walk`] matches on each node's kind, presents the node to the visitor,
//! then forwards to its children: own tokens first, then structural
//! children (ast/ref relations, referenced records/enums/typedefs,
//! successor blocks). Each node is presented at most once per walk, so
//! cyclic edges terminate.

use super::{GraphExtraction, Node, NodeArena, NodeId};
use super::{BlockNode, DeclNode, EnumNode, FunctionNode, RecordNode, StmtNode, TypedefNode};
use crate::base::Token;

/// A consumer of graph nodes. Every method defaults to doing nothing.
pub trait Visitor {
    fn visit_extraction(&mut self, _extraction: &GraphExtraction) {}

    fn visit_function(&mut self, _arena: &NodeArena, _id: NodeId, _node: &FunctionNode) {}

    fn visit_decl(&mut self, _arena: &NodeArena, _id: NodeId, _node: &DeclNode) {}

    fn visit_stmt(&mut self, _arena: &NodeArena, _id: NodeId, _node: &StmtNode) {}

    fn visit_record(&mut self, _arena: &NodeArena, _id: NodeId, _node: &RecordNode) {}

    fn visit_enum(&mut self, _arena: &NodeArena, _id: NodeId, _node: &EnumNode) {}

    fn visit_typedef(&mut self, _arena: &NodeArena, _id: NodeId, _node: &TypedefNode) {}

    fn visit_block(&mut self, _arena: &NodeArena, _id: NodeId, _node: &BlockNode) {}

    /// Called for each token owned by node `owner`.
    fn visit_token(&mut self, _owner: NodeId, _token: &Token) {}
}

/// Walk an extraction: functions first, then top-level records.
pub fn walk<V: Visitor + ?Sized>(extraction: &GraphExtraction, visitor: &mut V) {
    visitor.visit_extraction(extraction);

    let mut walker = Walker::new(extraction.arena());
    for &id in extraction.function_ids() {
        walker.node(id, visitor);
    }
    for &id in extraction.record_ids() {
        walker.node(id, visitor);
    }
}

/// Walk everything reachable from a single node.
pub fn walk_from<V: Visitor + ?Sized>(arena: &NodeArena, root: NodeId, visitor: &mut V) {
    Walker::new(arena).node(root, visitor);
}

struct Walker<'a> {
    arena: &'a NodeArena,
    seen: Vec<bool>,
}

impl<'a> Walker<'a> {
    fn new(arena: &'a NodeArena) -> Self {
        Self {
            arena,
            seen: vec![false; arena.len()],
        }
    }

    fn node<V: Visitor + ?Sized>(&mut self, id: NodeId, visitor: &mut V) {
        if std::mem::replace(&mut self.seen[id.index()], true) {
            return;
        }

        let arena = self.arena;
        match arena.get(id) {
            Node::Function(f) => {
                visitor.visit_function(arena, id, f);
                self.tokens(id, &f.tokens, visitor);
                self.nodes(&f.args, visitor);
                self.node(f.entry_stmt, visitor);
                self.nodes(&f.cfg_blocks, visitor);
            }
            Node::Decl(d) => {
                visitor.visit_decl(arena, id, d);
                self.tokens(id, &d.tokens, visitor);
                if let Some(record) = d.record_type {
                    self.node(record, visitor);
                }
                if let Some(typedef) = d.referenced_typedef {
                    self.node(typedef, visitor);
                }
            }
            Node::Stmt(s) => {
                visitor.visit_stmt(arena, id, s);
                self.tokens(id, &s.tokens, visitor);
                self.nodes(&s.ast_relations, visitor);
                self.nodes(&s.ref_relations, visitor);
            }
            Node::Record(r) => {
                visitor.visit_record(arena, id, r);
                self.tokens(id, &r.tokens, visitor);
                self.nodes(&r.referenced_records, visitor);
                self.nodes(&r.referenced_enums, visitor);
                self.nodes(&r.referenced_typedefs, visitor);
            }
            Node::Enum(e) => {
                visitor.visit_enum(arena, id, e);
                self.tokens(id, &e.tokens, visitor);
            }
            Node::Typedef(t) => {
                visitor.visit_typedef(arena, id, t);
                self.tokens(id, &t.tokens, visitor);
            }
            Node::Block(b) => {
                visitor.visit_block(arena, id, b);
                self.nodes(&b.statements, visitor);
                self.nodes(&b.successors, visitor);
            }
        }
    }

    fn nodes<V: Visitor + ?Sized>(&mut self, ids: &[NodeId], visitor: &mut V) {
        for &id in ids {
            self.node(id, visitor);
        }
    }

    fn tokens<V: Visitor + ?Sized>(&mut self, owner: NodeId, tokens: &[Token], visitor: &mut V) {
        for token in tokens {
            visitor.visit_token(owner, token);
        }
    }
}
