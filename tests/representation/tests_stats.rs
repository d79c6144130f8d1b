#![allow(clippy::unwrap_used)]

use compy::representation::stats::{collect_tokens, nesting_depth, statement_counts, subtree, tokens_to_string};
use compy::representation::type_class;
use rstest::rstest;

use crate::helpers::graph_helpers::*;
use crate::helpers::unit_fixtures::*;

#[test]
fn test_statement_counts_of_function_body() {
    let graph = extract_graph(&max_function());
    let (_, max) = graph.function("max").unwrap();
    let counts = statement_counts(graph.arena(), max.entry_stmt);

    assert_eq!(counts.len(), 7);
    assert_eq!(counts["CompoundStmt"], 1);
    assert_eq!(counts["IfStmt"], 1);
    assert_eq!(counts["ReturnStmt"], 2);
    assert_eq!(counts["BinaryOperator"], 1);
    assert_eq!(counts["BinaryOperator_greater"], 1);
    assert_eq!(counts["ImplicitCastExpr"], 4);
    assert_eq!(counts["DeclRefExpr"], 4);
}

#[test]
fn test_declarations_in_subtree_are_not_counted() {
    let graph = extract_graph(&typedef_locals());
    let (_, function) = graph.functions().next().unwrap();
    let counts = statement_counts(graph.arena(), function.entry_stmt);

    assert_eq!(counts["DeclStmt"], 2);
    assert!(counts.keys().all(|k| !k.contains("Var")));

    let x = decl_named(&graph, "x");
    assert!(subtree(graph.arena(), function.entry_stmt).contains(&x));
}

#[test]
fn test_body_tokens_render_in_stream_order() {
    let graph = extract_graph(&max_function());
    let (_, max) = graph.function("max").unwrap();

    let tokens = collect_tokens(graph.arena(), max.entry_stmt);
    assert_eq!(
        tokens_to_string(&tokens),
        "{ if ( a > b ) return a ; return b ; }"
    );
}

#[test]
fn test_loop_nesting_depth() {
    let graph = extract_graph(&while_loop());
    let (_, spin) = graph.function("spin").unwrap();
    let arena = graph.arena();

    assert_eq!(nesting_depth(arena, spin.entry_stmt, "WhileStmt"), 1);
    assert_eq!(nesting_depth(arena, spin.entry_stmt, "ForStmt"), 0);
    assert_eq!(nesting_depth(arena, spin.entry_stmt, "BinaryOperator"), 2);
}

#[rstest]
#[case("int", "intType")]
#[case("unsigned int", "intType")]
#[case("float", "floatType")]
#[case("int [1337]", "arrayType")]
#[case("int (int, int)", "fnType")]
#[case("struct node *", "type")]
#[case("char", "type")]
fn test_type_class(#[case] ty: &str, #[case] expected: &str) {
    assert_eq!(type_class(ty), expected);
}
