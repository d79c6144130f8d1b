#![allow(clippy::unwrap_used)]

use compy::diagnostics::{Severity, codes};
use compy::syntax::Stmt;
use compy::{ExtractError, Extractor, SourceRange, TextSize};
use rstest::rstest;

use crate::helpers::graph_helpers::names;
use crate::helpers::source_fixtures::SIMPLE_FUNCTION;
use crate::helpers::unit_builder::UnitBuilder;
use crate::helpers::unit_fixtures::FixtureFrontend;

fn shifted(location: TextSize) -> TextSize {
    location + TextSize::new(1)
}

fn unindexed_end(b: &UnitBuilder) -> SourceRange {
    SourceRange::new(b.loc(("return", 0)), shifted(b.loc(("return", 0))))
}

fn unindexed_begin(b: &UnitBuilder) -> SourceRange {
    SourceRange::new(shifted(b.loc(("return", 0))), b.loc(("1", 0)))
}

fn inverted(b: &UnitBuilder) -> SourceRange {
    b.range(("1", 0), ("return", 0))
}

/// `int foo() { return 1; }` whose return statement carries `bad_range`.
fn frontend_with_broken_return(bad_range: fn(&UnitBuilder) -> SourceRange) -> (FixtureFrontend, SourceRange) {
    let mut b = UnitBuilder::new(SIMPLE_FUNCTION);
    let int = b.builtin("int");
    let fn_ty = b.function_type(int, vec![]);

    let literal = b.leaf("IntegerLiteral", ("1", 0));
    let range = bad_range(&b);
    let ret = b
        .unit_mut()
        .add_stmt(Stmt::new("ReturnStmt", range).with_children([literal]));
    let body = b.stmt("CompoundStmt", ("{", 0), ("}", 0), vec![ret]);
    let foo = b.function(("foo", 0), ("int", 0), ("}", 0), fn_ty, vec![], Some(body));
    b.top(foo);

    let frontend = FixtureFrontend::new().with_unit(SIMPLE_FUNCTION, b.finish());
    (frontend, range)
}

#[rstest]
#[case::unindexed_end(unindexed_end)]
#[case::unindexed_begin(unindexed_begin)]
#[case::inverted(inverted)]
fn test_token_lookup_failure_is_entity_local(#[case] bad_range: fn(&UnitBuilder) -> SourceRange) {
    let (frontend, range) = frontend_with_broken_return(bad_range);
    let graph = Extractor::new(frontend).graph_from_string(SIMPLE_FUNCTION).unwrap();

    let diagnostics = graph.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, codes::TOKEN_LOOKUP);
    assert_eq!(diagnostics[0].severity, Severity::Error);
    assert_eq!(diagnostics[0].range, Some(range));
    assert!(diagnostics[0].message.contains("ReturnStmt"));
    assert!(graph.has_errors());

    // The statement keeps its place in the tree without tokens.
    let arena = graph.arena();
    let (_, foo) = graph.function("foo").unwrap();
    assert_eq!(names(&foo.tokens), ["int", "foo", "(", ")"]);
    let body = arena.stmt(foo.entry_stmt).unwrap();
    assert_eq!(names(&body.tokens), ["{", "return", ";", "}"]);

    let ret = arena.stmt(body.ast_relations[0]).unwrap();
    assert_eq!(ret.name, "ReturnStmt");
    assert!(ret.tokens.is_empty());
    let literal = arena.stmt(ret.ast_relations[0]).unwrap();
    assert_eq!(names(&literal.tokens), ["1"]);
}

#[test]
fn test_frontend_failure_aborts_graph_extraction() {
    let extractor = Extractor::new(FixtureFrontend::new());
    let err = extractor.graph_from_string("int broken(").unwrap_err();

    let ExtractError::Frontend(frontend) = err;
    assert_eq!(frontend.diagnostics.len(), 2);
    assert_eq!(frontend.diagnostics[1], "1 error generated.");
}

#[test]
fn test_frontend_failure_aborts_sequence_extraction() {
    let extractor = Extractor::new(FixtureFrontend::new());
    let err = extractor.seq_from_string("int broken(").unwrap_err();

    assert!(matches!(&err, ExtractError::Frontend(e) if e.diagnostics.len() == 2));
    assert!(err.to_string().contains("expected external declaration"));
}
