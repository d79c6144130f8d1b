//! Representations derived from a graph extraction.
//!
//! - [`AstGraph`] — typed directed multigraph for learning pipelines
//! - [`stats`] — token rendering and statement statistics

mod ast_graph;
pub mod stats;

pub use ast_graph::{AstGraph, EdgeKind, GraphFlavor, GraphKey, GraphNode};

/// Coarse class of a printed C type.
///
/// ```
/// use compy::representation::type_class;
///
/// assert_eq!(type_class("int[10]"), "arrayType");
/// assert_eq!(type_class("int (*)(void)"), "fnType");
/// assert_eq!(type_class("unsigned int"), "intType");
/// assert_eq!(type_class("struct st *"), "type");
/// ```
pub fn type_class(ty: &str) -> &'static str {
    if ty.contains(['[', ']']) {
        "arrayType"
    } else if ty.contains(['(', ')']) {
        "fnType"
    } else if ty.contains("int") {
        "intType"
    } else if ty.contains("float") {
        "floatType"
    } else {
        "type"
    }
}
