// Host-side tests for the static connection graph.

use folio_core::ConnectionGraph;
use std::collections::HashSet;

#[test]
fn nodes_sit_on_the_requested_shell() {
    let graph = ConnectionGraph::build(50, 2.0, 1.2);
    assert_eq!(graph.nodes().len(), 50);
    for n in graph.nodes() {
        assert!((n.length() - 2.0).abs() < 1e-4, "|node| = {}", n.length());
    }
}

#[test]
fn rebuild_with_identical_inputs_is_identical() {
    let a = ConnectionGraph::build(50, 2.0, 1.2);
    let b = ConnectionGraph::build(50, 2.0, 1.2);
    assert_eq!(a.nodes(), b.nodes());
    assert_eq!(a.edges(), b.edges());
}

#[test]
fn edges_connect_close_pairs_and_only_close_pairs() {
    let graph = ConnectionGraph::build(50, 2.0, 1.2);
    assert!(!graph.edges().is_empty(), "50 nodes at r=2 must link up");
    let edge_set: HashSet<[usize; 2]> = graph.edges().iter().copied().collect();
    assert_eq!(edge_set.len(), graph.edges().len(), "no duplicate edges");
    for i in 0..graph.nodes().len() {
        for j in (i + 1)..graph.nodes().len() {
            let close = graph.nodes()[i].distance(graph.nodes()[j]) < 1.2;
            assert_eq!(
                edge_set.contains(&[i, j]),
                close,
                "membership mismatch for pair ({i},{j})"
            );
        }
    }
}

#[test]
fn raising_the_threshold_never_removes_an_edge() {
    let tight = ConnectionGraph::build(50, 2.0, 1.2);
    let loose = ConnectionGraph::build(50, 2.0, 1.5);
    let loose_set: HashSet<[usize; 2]> = loose.edges().iter().copied().collect();
    for e in tight.edges() {
        assert!(loose_set.contains(e), "edge {e:?} vanished at a looser threshold");
    }
    assert!(loose.edges().len() >= tight.edges().len());
}

#[test]
fn edges_are_ordered_endpoint_pairs() {
    let graph = ConnectionGraph::build(40, 2.0, 1.3);
    for &[a, b] in graph.edges() {
        assert!(a < b, "undirected edges are stored with a < b");
        assert!(b < graph.nodes().len());
    }
}

#[test]
fn line_vertices_flatten_every_edge() {
    let graph = ConnectionGraph::build(50, 2.0, 1.2);
    let verts = graph.line_vertices();
    assert_eq!(verts.len(), graph.edges().len() * 2);
    let [a, b] = graph.edges()[0];
    assert_eq!(verts[0], graph.nodes()[a]);
    assert_eq!(verts[1], graph.nodes()[b]);
}

#[test]
fn degenerate_inputs_yield_empty_graphs() {
    let empty = ConnectionGraph::build(0, 2.0, 1.2);
    assert!(empty.nodes().is_empty());
    assert!(empty.edges().is_empty());
    assert!(empty.line_vertices().is_empty());

    let loner = ConnectionGraph::build(1, 2.0, 1.2);
    assert_eq!(loner.nodes().len(), 1);
    assert!(loner.edges().is_empty());
}
