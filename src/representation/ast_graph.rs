//! AST graph — a typed directed multigraph built with petgraph.
//!
//! Nodes are functions, arguments, statements, referenced declarations,
//! control-flow blocks and tokens. Edges carry an [`EdgeKind`]; which kinds
//! are emitted is chosen by the [`GraphFlavor`].

use indexmap::IndexMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use rustc_hash::FxHashMap;
use tracing::debug;

use super::type_class;
use crate::base::Token;
use crate::graph::{FunctionNode, GraphExtraction, Node, NodeArena, NodeId, StmtNode, Visitor};

/// Relationship carried by a graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Syntactic parent to child.
    Ast,
    /// Statement to the declaration it reads.
    Data,
    /// Block to successor block.
    Cfg,
    /// Statement to the block containing it.
    In,
    /// Node to a token it owns.
    Token,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Ast => "ast",
            EdgeKind::Data => "data",
            EdgeKind::Cfg => "cfg",
            EdgeKind::In => "in",
            EdgeKind::Token => "token",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge kinds a graph contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphFlavor {
    Ast,
    #[default]
    AstData,
    AstDataCfg,
    AstDataCfgToken,
}

impl GraphFlavor {
    pub fn edge_kinds(self) -> &'static [EdgeKind] {
        match self {
            GraphFlavor::Ast => &[EdgeKind::Ast],
            GraphFlavor::AstData => &[EdgeKind::Ast, EdgeKind::Data],
            GraphFlavor::AstDataCfg => &[EdgeKind::Ast, EdgeKind::Cfg, EdgeKind::In, EdgeKind::Data],
            GraphFlavor::AstDataCfgToken => &[
                EdgeKind::Ast,
                EdgeKind::Cfg,
                EdgeKind::In,
                EdgeKind::Data,
                EdgeKind::Token,
            ],
        }
    }

    pub fn includes(self, kind: EdgeKind) -> bool {
        self.edge_kinds().contains(&kind)
    }
}

/// Identity of a graph node: an extraction node or a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKey {
    Node(NodeId),
    /// Keyed by the token's stream index.
    Token(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub key: GraphKey,
    pub label: String,
    /// Stream position, for token nodes.
    pub seq_order: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct AstGraph {
    graph: DiGraph<GraphNode, EdgeKind>,
    flavor: GraphFlavor,
    index: FxHashMap<GraphKey, NodeIndex>,
}

impl AstGraph {
    /// Build the graph of every function in `extraction`.
    pub fn build(extraction: &GraphExtraction, flavor: GraphFlavor) -> Self {
        let mut builder = GraphBuilder {
            graph: Self {
                graph: DiGraph::new(),
                flavor,
                index: FxHashMap::default(),
            },
        };
        extraction.accept(&mut builder);

        let graph = builder.graph;
        debug!(
            ?flavor,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "ast graph built"
        );
        graph
    }

    pub fn flavor(&self) -> GraphFlavor {
        self.flavor
    }

    pub fn edge_kinds(&self) -> &'static [EdgeKind] {
        self.flavor.edge_kinds()
    }

    pub fn graph(&self) -> &DiGraph<GraphNode, EdgeKind> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, key: GraphKey) -> Option<&GraphNode> {
        self.index.get(&key).map(|&idx| &self.graph[idx])
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> usize {
        self.graph.edge_weights().filter(|&&w| w == kind).count()
    }

    pub fn has_edge(&self, from: GraphKey, to: GraphKey, kind: EdgeKind) -> bool {
        match (self.index.get(&from), self.index.get(&to)) {
            (Some(&a), Some(&b)) => self.graph.edges_connecting(a, b).any(|e| *e.weight() == kind),
            _ => false,
        }
    }

    /// How often each node label occurs, in first-seen order.
    pub fn label_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for node in self.graph.node_weights() {
            *counts.entry(node.label.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Existing node for `key`, or a new one labelled by `label`.
    fn ensure(&mut self, key: GraphKey, label: impl FnOnce() -> String, seq_order: Option<u64>) -> NodeIndex {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode {
            key,
            label: label(),
            seq_order,
        });
        self.index.insert(key, idx);
        idx
    }

    fn ensure_node(&mut self, arena: &NodeArena, id: NodeId) -> NodeIndex {
        self.ensure(GraphKey::Node(id), || node_label(arena, id), None)
    }
}

fn node_label(arena: &NodeArena, id: NodeId) -> String {
    match arena.get(id) {
        Node::Stmt(stmt) => stmt.name.to_string(),
        Node::Decl(decl) => type_class(&decl.ty).to_string(),
        Node::Block(_) => "cfg".to_string(),
        other => other.kind_name().to_string(),
    }
}

struct GraphBuilder {
    graph: AstGraph,
}

impl GraphBuilder {
    fn wants(&self, kind: EdgeKind) -> bool {
        self.graph.flavor.includes(kind)
    }

    fn edge(&mut self, from: NodeIndex, to: NodeIndex, kind: EdgeKind) {
        self.graph.graph.add_edge(from, to, kind);
    }
}

impl Visitor for GraphBuilder {
    fn visit_function(&mut self, arena: &NodeArena, id: NodeId, node: &FunctionNode) {
        let function = self.graph.ensure(GraphKey::Node(id), || "function".to_string(), None);

        for &arg in &node.args {
            let label = || {
                let ty = arena.decl(arg).map(|d| d.ty.as_str()).unwrap_or_default();
                format!("argument:{}", type_class(ty))
            };
            let arg_idx = self.graph.ensure(GraphKey::Node(arg), label, None);
            self.edge(function, arg_idx, EdgeKind::Ast);
        }
        let entry = self.graph.ensure_node(arena, node.entry_stmt);
        self.edge(function, entry, EdgeKind::Ast);

        if !self.wants(EdgeKind::Cfg) {
            return;
        }
        for &block_id in &node.cfg_blocks {
            let Some(block) = arena.block(block_id) else {
                continue;
            };
            let block_idx = self.graph.ensure_node(arena, block_id);
            for &succ in &block.successors {
                let succ_idx = self.graph.ensure_node(arena, succ);
                self.edge(block_idx, succ_idx, EdgeKind::Cfg);
            }
            for &stmt in &block.statements {
                let stmt_idx = self.graph.ensure_node(arena, stmt);
                self.edge(stmt_idx, block_idx, EdgeKind::In);
            }
        }
    }

    fn visit_stmt(&mut self, arena: &NodeArena, id: NodeId, node: &StmtNode) {
        let stmt = self.graph.ensure_node(arena, id);
        for &child in &node.ast_relations {
            let child_idx = self.graph.ensure_node(arena, child);
            self.edge(stmt, child_idx, EdgeKind::Ast);
        }
        if self.wants(EdgeKind::Data) {
            for &decl in &node.ref_relations {
                let decl_idx = self.graph.ensure_node(arena, decl);
                self.edge(stmt, decl_idx, EdgeKind::Data);
            }
        }
    }

    fn visit_token(&mut self, owner: NodeId, token: &Token) {
        if !self.wants(EdgeKind::Token) {
            return;
        }
        // Tokens of records and aliases reached through declarations stay out.
        let Some(&owner_idx) = self.graph.index.get(&GraphKey::Node(owner)) else {
            return;
        };
        let token_idx = self.graph.ensure(
            GraphKey::Token(token.index),
            || token.name.to_string(),
            Some(token.index),
        );
        self.edge(owner_idx, token_idx, EdgeKind::Token);
    }
}
