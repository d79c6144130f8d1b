#![allow(clippy::unwrap_used)]

use compy::graph::NodeId;
use rstest::rstest;

use crate::helpers::graph_helpers::*;
use crate::helpers::unit_fixtures::*;

#[test]
fn test_tokens_go_to_innermost_node() {
    let graph = extract_graph(&simple_function());
    assert!(graph.diagnostics().is_empty());

    let arena = graph.arena();
    let (_, foo) = graph.function("foo").unwrap();
    assert_eq!(foo.ty, "int ()");
    assert_eq!(names(&foo.tokens), ["int", "foo", "(", ")"]);
    assert!(foo.args.is_empty());

    let body = arena.stmt(foo.entry_stmt).unwrap();
    assert_eq!(body.name, "CompoundStmt");
    assert_eq!(names(&body.tokens), ["{", ";", "}"]);

    let ret = arena.stmt(body.ast_relations[0]).unwrap();
    assert_eq!(ret.name, "ReturnStmt");
    assert_eq!(names(&ret.tokens), ["return"]);

    let literal = arena.stmt(ret.ast_relations[0]).unwrap();
    assert_eq!(literal.name, "IntegerLiteral");
    assert_eq!(names(&literal.tokens), ["1"]);
}

#[test]
fn test_parameters_are_canonical_declarations() {
    let graph = extract_graph(&max_function());
    let arena = graph.arena();
    let (_, max) = graph.function("max").unwrap();

    assert_eq!(max.ty, "int (int, int)");
    assert_eq!(names(&max.tokens), ["int", "max", "(", ",", ")"]);
    assert_eq!(max.args.len(), 2);

    let a = arena.decl(max.args[0]).unwrap();
    assert_eq!(a.name, "a");
    assert_eq!(a.kind, "ParmVar");
    assert_eq!(a.ty, "int");
    assert_eq!(names(&a.tokens), ["int", "a"]);
    assert_eq!(a.name_token.as_ref().unwrap().name, "a");
    assert!(a.record_type.is_none());
    assert!(a.referenced_typedef.is_none());

    // Every read of a parameter points at the parameter node itself.
    let refs: Vec<NodeId> = stmts_named(&graph, "DeclRefExpr")
        .into_iter()
        .map(|id| arena.stmt(id).unwrap().ref_relations[0])
        .collect();
    assert_eq!(refs, vec![max.args[0], max.args[1], max.args[0], max.args[1]]);
    assert_eq!(count_nodes(&graph, "decl"), 2);
}

#[test]
fn test_references_do_not_take_tokens() {
    let graph = extract_graph(&max_function());
    let arena = graph.arena();

    for id in stmts_named(&graph, "DeclRefExpr") {
        let reference = arena.stmt(id).unwrap();
        assert_eq!(reference.tokens.len(), 1);
        assert!(reference.ast_relations.is_empty());
    }
    // The enclosing casts share their child's range and get nothing.
    for id in stmts_named(&graph, "ImplicitCastExpr") {
        assert!(arena.stmt(id).unwrap().tokens.is_empty());
    }
}

#[rstest]
#[case::simple(simple_function())]
#[case::max(max_function())]
#[case::while_loop(while_loop())]
fn test_every_function_token_claimed_once(#[case] fixture: Fixture) {
    let graph = extract_graph(&fixture);

    let mut indices: Vec<u64> = claimed_tokens(&graph).iter().map(|t| t.index).collect();
    indices.sort_unstable();
    let expected: Vec<u64> = (0..fixture.token_count() as u64).collect();
    assert_eq!(indices, expected);
}

#[test]
fn test_identical_returns_are_distinct_nodes() {
    let graph = extract_graph(&anonymous_struct_global());
    let arena = graph.arena();

    let returns = stmts_named(&graph, "ReturnStmt");
    assert_eq!(returns.len(), 2);
    assert_ne!(returns[0], returns[1]);
    let first = arena.stmt(returns[0]).unwrap();
    let second = arena.stmt(returns[1]).unwrap();
    assert_eq!(names(&first.tokens), names(&second.tokens));
    assert_ne!(first.tokens[0].location, second.tokens[0].location);

    // Both member reads reference the same field declaration.
    let members = stmts_named(&graph, "MemberExpr");
    assert_eq!(members.len(), 2);
    let first_member = arena.stmt(members[0]).unwrap();
    let second_member = arena.stmt(members[1]).unwrap();
    assert_eq!(first_member.ref_relations.len(), 1);
    assert_eq!(first_member.ref_relations, second_member.ref_relations);

    let field = arena.decl(first_member.ref_relations[0]).unwrap();
    assert_eq!(field.name, "x");
    assert_eq!(field.kind, "Field");
    assert_eq!(field.ty, "int");
    assert_eq!(names(&first_member.tokens), [".", "x"]);
}

#[test]
fn test_global_of_anonymous_struct_links_record() {
    let graph = extract_graph(&anonymous_struct_global());
    let arena = graph.arena();

    assert_eq!(graph.record_ids().len(), 2);
    let st2 = arena.decl(decl_named(&graph, "st2")).unwrap();
    assert_eq!(st2.kind, "Var");
    assert!(st2.tokens.is_empty());

    let record = st2.record_type.unwrap();
    assert_eq!(graph.record_ids()[1], record);
    assert_eq!(arena.record(record).unwrap().name, "");
    assert_eq!(count_nodes(&graph, "record"), 2);
}

#[test]
fn test_typedef_local_resolves_alias_once() {
    let graph = extract_graph(&typedef_locals());
    let arena = graph.arena();

    let x = arena.decl(decl_named(&graph, "x")).unwrap();
    let y = arena.decl(decl_named(&graph, "y")).unwrap();
    assert_eq!(x.ty, "foobar");
    assert_eq!(x.kind, "Var");
    assert!(x.record_type.is_none());
    assert!(x.tokens.is_empty());
    assert_eq!(x.name_token.as_ref().unwrap().name, "x");

    let alias = x.referenced_typedef.unwrap();
    assert_eq!(y.referenced_typedef, Some(alias));
    assert_eq!(count_nodes(&graph, "typedef"), 1);

    let foobar = arena.typedef(alias).unwrap();
    assert_eq!(foobar.name, "foobar");
    assert_eq!(foobar.underlying, "int");
    assert_eq!(names(&foobar.tokens), ["typedef", "int", "foobar"]);
    assert_eq!(foobar.name_token.as_ref().unwrap().name, "foobar");

    let decl_stmts = stmts_named(&graph, "DeclStmt");
    let first = arena.stmt(decl_stmts[0]).unwrap();
    assert_eq!(names(&first.tokens), ["foobar", "x", "=", ";"]);
    assert_eq!(first.ast_relations.len(), 2);
    assert_eq!(first.ast_relations[1], decl_named(&graph, "x"));
}

#[test]
fn test_function_reference_to_prototype() {
    let fixture = prototype_then_definition();
    let graph = extract_graph(&fixture);
    assert!(graph.diagnostics().is_empty());

    let functions: Vec<_> = graph.functions().map(|(_, f)| f.name.as_str()).collect();
    assert_eq!(functions, ["foo"]);

    let bar = graph.arena().decl(decl_named(&graph, "bar")).unwrap();
    assert_eq!(bar.kind, "Function");
    assert_eq!(bar.ty, "int (int)");
    assert!(bar.tokens.is_empty());

    // The prototype's tokens were drained, not handed to anyone.
    let prototype_end = fixture.index((";", 0));
    let claimed = claimed_tokens(&graph);
    assert!(claimed.iter().all(|t| t.index > prototype_end));
    assert_eq!(claimed.len() as u64, fixture.token_count() as u64 - prototype_end - 1);
}
