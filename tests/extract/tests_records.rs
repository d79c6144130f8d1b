#![allow(clippy::unwrap_used)]

use compy::ExtractOptions;

use crate::helpers::graph_helpers::*;
use crate::helpers::unit_fixtures::*;

#[test]
fn test_top_level_records_in_document_order() {
    let graph = extract_graph(&linked_records());
    let records: Vec<_> = graph.records().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(records, ["leaf", "node"]);
    assert_eq!(count_nodes(&graph, "record"), 2);
}

#[test]
fn test_self_referential_record_terminates_with_self_edge() {
    let graph = extract_graph(&linked_records());
    let arena = graph.arena();
    let node_id = record_named(&graph, "node");
    let leaf_id = record_named(&graph, "leaf");

    let node = arena.record(node_id).unwrap();
    // next, then the function pointer's return and first parameter.
    assert_eq!(node.referenced_records, vec![node_id, leaf_id, node_id]);
    assert!(!node.is_typedef);
}

#[test]
fn test_alias_pointer_field_references_typedef() {
    let graph = extract_graph(&linked_records());
    let arena = graph.arena();
    let node = arena.record(record_named(&graph, "node")).unwrap();

    assert_eq!(node.referenced_typedefs.len(), 1);
    let handle = arena.typedef(node.referenced_typedefs[0]).unwrap();
    assert_eq!(handle.name, "handle");
    assert_eq!(handle.underlying, "int");
    assert_eq!(names(&handle.tokens), ["typedef", "int", "handle"]);
}

#[test]
fn test_enum_field_references_enum() {
    let graph = extract_graph(&linked_records());
    let arena = graph.arena();
    let node = arena.record(record_named(&graph, "node")).unwrap();

    assert_eq!(node.referenced_enums.len(), 1);
    let color = arena.enum_decl(node.referenced_enums[0]).unwrap();
    assert_eq!(color.name, "color");
    assert_eq!(
        names(&color.tokens),
        ["enum", "color", "{", "RED", ",", "GREEN", "}"]
    );
}

#[test]
fn test_pointer_parameter_links_record() {
    let graph = extract_graph(&linked_records());
    let arena = graph.arena();
    let (_, use_fn) = graph.function("use").unwrap();

    let n = arena.decl(use_fn.args[0]).unwrap();
    assert_eq!(n.ty, "struct node *");
    assert_eq!(n.record_type, Some(record_named(&graph, "node")));
    assert_eq!(names(&n.tokens), ["struct", "node", "*", "n"]);
}

#[test]
fn test_record_definition_tokens_are_shared() {
    let graph = extract_graph(&typedef_struct());
    let arena = graph.arena();
    let pt_id = record_named(&graph, "pt");
    let other_id = record_named(&graph, "other");

    let pt = arena.record(pt_id).unwrap();
    assert!(pt.is_typedef);
    assert_eq!(names(&pt.tokens), ["struct", "pt", "{", "int", "x", ";", "}"]);

    let other = arena.record(other_id).unwrap();
    assert!(!other.is_typedef);
    assert_eq!(other.referenced_records, vec![pt_id]);
    assert_eq!(other.referenced_typedefs.len(), 1);

    // The alias re-reads the definition it wraps.
    let pt_t = arena.typedef(other.referenced_typedefs[0]).unwrap();
    assert_eq!(pt_t.name, "pt_t");
    assert_eq!(pt_t.underlying, "struct pt");
    assert_eq!(
        names(&pt_t.tokens),
        ["typedef", "struct", "pt", "{", "int", "x", ";", "}", "pt_t"]
    );
}

#[test]
fn test_record_visiting_can_be_disabled() {
    let options = ExtractOptions::default().with_visit_records(false);
    let graph = extract_graph_with(&linked_records(), options);

    assert_eq!(graph.records().count(), 0);
    // Records reached from functions are still built.
    let (_, use_fn) = graph.function("use").unwrap();
    let n = graph.arena().decl(use_fn.args[0]).unwrap();
    let node = graph.arena().record(n.record_type.unwrap()).unwrap();
    assert_eq!(node.name, "node");
    assert_eq!(count_nodes(&graph, "record"), 2);
}

#[test]
fn test_enum_behind_alias_field() {
    let graph = extract_graph(&enum_alias_field());
    let arena = graph.arena();
    let s = arena.record(record_named(&graph, "s")).unwrap();

    assert_eq!(s.referenced_typedefs.len(), 1);
    let color_t = arena.typedef(s.referenced_typedefs[0]).unwrap();
    assert_eq!(color_t.name, "color_t");
    assert_eq!(color_t.underlying, "enum color");
    assert_eq!(names(&color_t.tokens), ["typedef", "enum", "color", "color_t"]);

    assert_eq!(s.referenced_enums.len(), 1);
    let color = arena.enum_decl(s.referenced_enums[0]).unwrap();
    assert_eq!(color.name, "color");
    assert_eq!(
        names(&color.tokens),
        ["enum", "color", "{", "RED", ",", "GREEN", "}"]
    );
    assert!(s.referenced_records.is_empty());
}

#[test]
fn test_mutually_referential_records_terminate() {
    let graph = extract_graph(&mutual_records());
    let arena = graph.arena();
    let a_id = record_named(&graph, "a");
    let b_id = record_named(&graph, "b");

    assert_eq!(count_nodes(&graph, "record"), 2);
    // The forward declaration resolves to the definition of `b`.
    let records: Vec<_> = graph.records().map(|(_, r)| r.name.as_str()).collect();
    assert_eq!(records, ["b", "a"]);

    let a = arena.record(a_id).unwrap();
    let b = arena.record(b_id).unwrap();
    assert_eq!(a.referenced_records, vec![b_id]);
    assert_eq!(b.referenced_records, vec![a_id]);
    assert_eq!(names(&a.tokens), ["struct", "a", "{", "struct", "b", "*", "b", ";", "}"]);
    assert_eq!(names(&b.tokens), ["struct", "b", "{", "struct", "a", "*", "a", ";", "}"]);
}
