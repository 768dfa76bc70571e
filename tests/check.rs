use rbellman::graph::{Edge, Graph};
use rbellman::search::{check_cycle, check_optimality, BellmanFord, OptimalityViolation};

#[test]
fn closed_walks_pass() {
    check_cycle(&[Edge::new(2, 2, -1)]).unwrap();
    check_cycle(&[Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 0, 1)]).unwrap();
}

#[test]
fn empty_cycle_is_rejected() {
    assert_eq!(check_cycle(&[]), Err(OptimalityViolation::EmptyCycle));
}

#[test]
fn broken_chain_is_reported() {
    let cycle = [Edge::new(0, 1, 1), Edge::new(2, 0, 1)];
    assert_eq!(
        check_cycle(&cycle),
        Err(OptimalityViolation::CycleNotClosed(cycle[0], cycle[1]))
    );
}

#[test]
fn missing_wraparound_is_reported() {
    let cycle = [Edge::new(0, 1, 1), Edge::new(1, 2, 1)];
    assert_eq!(
        check_cycle(&cycle),
        Err(OptimalityViolation::CycleNotClosed(cycle[1], cycle[0]))
    );
}

#[test]
fn violation_messages() {
    let e = Edge::new(3, 4, -2);
    assert_eq!(
        OptimalityViolation::EdgeNotRelaxed(e).to_string(),
        "edge 3->4 -2 not relaxed"
    );
    assert_eq!(
        OptimalityViolation::CycleNotNegative(0).to_string(),
        "weight of negative cycle = 0"
    );
}

#[test]
fn engine_result_passes_on_its_own_graph() {
    let mut g = Graph::new(4);
    g.add_edges(&[
        Edge::new(0, 1, 1),
        Edge::new(1, 2, -3),
        Edge::new(0, 2, 4),
        Edge::new(3, 0, -9),
    ])
    .unwrap();
    let sp = BellmanFord::new(&g, 0).unwrap();
    assert_eq!(check_optimality(&g, &sp), Ok(()));
}

#[test]
fn engine_result_fails_on_a_different_graph() {
    let mut g = Graph::new(3);
    g.add_edges(&[Edge::new(0, 1, 5), Edge::new(1, 2, 5)]).unwrap();
    let sp = BellmanFord::new(&g, 0).unwrap();

    // A shortcut the computation never saw.
    let mut shortcut = g.clone();
    shortcut.add_edge(Edge::new(0, 2, 1)).unwrap();
    assert_eq!(
        check_optimality(&shortcut, &sp),
        Err(OptimalityViolation::EdgeNotRelaxed(Edge::new(0, 2, 1)))
    );

    let bigger = Graph::new(4);
    assert_eq!(
        check_optimality(&bigger, &sp),
        Err(OptimalityViolation::VertexCountMismatch { engine: 3, graph: 4 })
    );
}
