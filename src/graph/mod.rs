//! Graph representation — the cross-referenced output of one extraction.
//!
//! All nodes of a session live in one [`NodeArena`] and refer to each other
//! by [`NodeId`]. The arena is owned by the [`GraphExtraction`] and dropped
//! with it; no node outlives its extraction.
//!
//! ## Key Types
//!
//! - [`GraphExtraction`] — functions, records and diagnostics of a unit
//! - [`Node`] — closed set of node kinds
//! - [`Visitor`] / [`walk`] — uniform traversal for downstream consumers

mod nodes;
mod visitor;

pub use nodes::{
    BlockNode, DeclNode, EnumNode, FunctionNode, Node, RecordNode, StmtNode, TypedefNode,
};
pub use visitor::{Visitor, walk, walk_from};

use crate::diagnostics::Diagnostic;

/// Index of a node in its extraction's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================================
// NODE ARENA
// ============================================================================

/// Owner of every node created during one session.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    pub fn decl(&self, id: NodeId) -> Option<&DeclNode> {
        match self.get(id) {
            Node::Decl(n) => Some(n),
            _ => None,
        }
    }

    pub fn stmt(&self, id: NodeId) -> Option<&StmtNode> {
        match self.get(id) {
            Node::Stmt(n) => Some(n),
            _ => None,
        }
    }

    pub fn record(&self, id: NodeId) -> Option<&RecordNode> {
        match self.get(id) {
            Node::Record(n) => Some(n),
            _ => None,
        }
    }

    pub fn enum_decl(&self, id: NodeId) -> Option<&EnumNode> {
        match self.get(id) {
            Node::Enum(n) => Some(n),
            _ => None,
        }
    }

    pub fn typedef(&self, id: NodeId) -> Option<&TypedefNode> {
        match self.get(id) {
            Node::Typedef(n) => Some(n),
            _ => None,
        }
    }

    pub fn block(&self, id: NodeId) -> Option<&BlockNode> {
        match self.get(id) {
            Node::Block(n) => Some(n),
            _ => None,
        }
    }

    pub fn function(&self, id: NodeId) -> Option<&FunctionNode> {
        match self.get(id) {
            Node::Function(n) => Some(n),
            _ => None,
        }
    }
}

// ============================================================================
// GRAPH EXTRACTION
// ============================================================================

/// Graph output for one translation unit.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct GraphExtraction {
    pub(crate) arena: NodeArena,
    pub(crate) functions: Vec<NodeId>,
    pub(crate) records: Vec<NodeId>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl GraphExtraction {
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Function nodes in document order.
    pub fn functions(&self) -> impl Iterator<Item = (NodeId, &FunctionNode)> {
        self.functions
            .iter()
            .filter_map(|&id| self.arena.function(id).map(|f| (id, f)))
    }

    /// Top-level record nodes in document order.
    pub fn records(&self) -> impl Iterator<Item = (NodeId, &RecordNode)> {
        self.records
            .iter()
            .filter_map(|&id| self.arena.record(id).map(|r| (id, r)))
    }

    pub fn function_ids(&self) -> &[NodeId] {
        &self.functions
    }

    pub fn record_ids(&self) -> &[NodeId] {
        &self.records
    }

    /// Find a function node by name.
    pub fn function(&self, name: &str) -> Option<(NodeId, &FunctionNode)> {
        self.functions().find(|(_, f)| f.name == name)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Present every reachable node to `visitor`.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk(self, visitor);
    }
}
