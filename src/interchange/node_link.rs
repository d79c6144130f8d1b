//! Node-link view of an [`AstGraph`].

use petgraph::visit::EdgeRef;
use serde::Serialize;

use crate::representation::AstGraph;

/// A serializable snapshot of an AST graph. Node ids are the graph's node
/// indices; links keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLinkGraph<'a> {
    pub directed: bool,
    pub multigraph: bool,
    pub nodes: Vec<NodeLinkNode<'a>>,
    pub links: Vec<NodeLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLinkNode<'a> {
    pub id: usize,
    pub label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq_order: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLink {
    pub source: usize,
    pub target: usize,
    pub kind: &'static str,
}

impl<'a> NodeLinkGraph<'a> {
    pub fn new(graph: &'a AstGraph) -> Self {
        let inner = graph.graph();
        let nodes = inner
            .node_indices()
            .map(|idx| NodeLinkNode {
                id: idx.index(),
                label: inner[idx].label.as_str(),
                seq_order: inner[idx].seq_order,
            })
            .collect();
        let links = inner
            .edge_references()
            .map(|edge| NodeLink {
                source: edge.source().index(),
                target: edge.target().index(),
                kind: edge.weight().as_str(),
            })
            .collect();
        Self {
            directed: true,
            multigraph: true,
            nodes,
            links,
        }
    }
}
