//! Statement statistics and token rendering over extracted statement trees.
//!
//! Subtrees follow `ast_relations` only. Declarations listed as children of
//! a declaration statement are part of the subtree; referenced declarations
//! are not.

use indexmap::IndexMap;

use crate::base::Token;
use crate::graph::{Node, NodeArena, NodeId};

/// Class-name fragments of nodes counted by [`statement_counts`].
const COUNTED_CLASSES: &[&str] = &["Stmt", "Expr", "Operator", "Literal"];

/// Operator classes whose counts are refined by their own token kinds.
const REFINED_OPERATORS: &[&str] = &["BinaryOperator", "UnaryOperator"];

/// `root` and every node below it, in pre-order.
pub fn subtree(arena: &NodeArena, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        out.push(id);
        if let Node::Stmt(stmt) = arena.get(id) {
            stack.extend(stmt.ast_relations.iter().rev().copied());
        }
    }
    out
}

/// Every token owned by `root` or a node below it.
pub fn collect_tokens(arena: &NodeArena, root: NodeId) -> Vec<Token> {
    subtree(arena, root)
        .into_iter()
        .flat_map(|id| arena.get(id).tokens().iter().cloned())
        .collect()
}

/// Token spellings in stream order, separated by spaces. Pragma tokens are
/// left out.
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut ordered: Vec<&Token> = tokens.iter().filter(|t| !t.is_pragma()).collect();
    ordered.sort_by_key(|t| t.index);
    ordered
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Occurrences of each statement class below `root`.
///
/// Binary and unary operators are additionally counted under
/// `<class>_<token kinds>`, e.g. `BinaryOperator_plus`.
pub fn statement_counts(arena: &NodeArena, root: NodeId) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for id in subtree(arena, root) {
        let Some(stmt) = arena.stmt(id) else {
            continue;
        };
        let class = stmt.name.as_str();
        if !COUNTED_CLASSES.iter().any(|c| class.contains(c)) {
            continue;
        }
        *counts.entry(class.to_string()).or_insert(0) += 1;

        if REFINED_OPERATORS.contains(&class) {
            let kinds: Vec<&str> = stmt.tokens.iter().map(|t| t.kind.as_str()).collect();
            *counts.entry(format!("{}_{}", class, kinds.join("_"))).or_insert(0) += 1;
        }
    }
    counts
}

/// Largest number of `class` statements on one path down from `root`,
/// e.g. the loop nesting depth for `ForStmt`.
pub fn nesting_depth(arena: &NodeArena, root: NodeId, class: &str) -> usize {
    let Some(stmt) = arena.stmt(root) else {
        return 0;
    };
    let own = usize::from(stmt.name == class);
    let deepest = stmt
        .ast_relations
        .iter()
        .map(|&child| nesting_depth(arena, child, class))
        .max()
        .unwrap_or(0);
    own + deepest
}
