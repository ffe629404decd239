//! Tests for edge list loading using the tests/resources fixtures

use std::path::Path;

use rstest::rstest;
use treespan::errors::GraphError;
use treespan::parser::load_edge_list;
use treespan::util::testing;

#[test]
fn given_reference_fixture_when_loading_then_graph_matches_file() {
    testing::init_test_setup();
    let graph = load_edge_list(Path::new("tests/resources/trees/reference.edges")).unwrap();

    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.edge_count(), 9);
    // adjacency preserves file order
    assert_eq!(graph.neighbors(2).unwrap(), &[1, 3, 9, 4]);
    assert_eq!(graph.longest_path().unwrap().length, 5);
}

#[rstest]
#[case("tests/resources/trees/single.edges", 1, 0)]
#[case("tests/resources/trees/pair.edges", 2, 1)]
fn given_boundary_fixture_when_loading_then_diameter_matches(
    #[case] fixture: &str,
    #[case] vertex_count: usize,
    #[case] diameter: usize,
) {
    let graph = load_edge_list(Path::new(fixture)).unwrap();
    assert_eq!(graph.vertex_count(), vertex_count);
    assert_eq!(graph.longest_path().unwrap().length, diameter);
}

#[test]
fn given_missing_file_when_loading_then_reports_file_not_found() {
    let result = load_edge_list(Path::new("tests/resources/trees/not-existing.edges"));
    assert!(matches!(result, Err(GraphError::FileNotFound(_))));
}

#[test]
fn given_non_numeric_token_when_loading_then_reports_line_number() {
    let result = load_edge_list(Path::new("tests/resources/trees/fail/bad_token.edges"));

    match result {
        Err(GraphError::InvalidFormat { line, reason, .. }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("one"), "Reason should name the token: {}", reason);
        }
        other => panic!("Expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn given_out_of_range_endpoint_when_loading_then_rejects_before_traversal() {
    let result = load_edge_list(Path::new("tests/resources/trees/fail/out_of_range.edges"));
    assert!(matches!(
        result,
        Err(GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        })
    ));
}

#[test]
fn given_comment_only_file_when_loading_then_reports_missing_count() {
    let result = load_edge_list(Path::new("tests/resources/trees/fail/no_count.edges"));
    match result {
        Err(GraphError::InvalidFormat { reason, .. }) => {
            assert!(reason.contains("vertex count"), "got: {}", reason);
        }
        other => panic!("Expected InvalidFormat, got {:?}", other),
    }
}
