//! Optimality conditions for a finished [`BellmanFord`] computation.
//!
//! These checks are meant for tests and diagnostics; the engine itself never
//! runs them.

use thiserror::Error;

use crate::graph::{Edge, Graph};
use crate::search::bellman_ford::BellmanFord;
use crate::types::*;

/// The first optimality condition found to be violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimalityViolation {
    #[error("cycle is empty")]
    EmptyCycle,
    #[error("cycle edges {0} and {1} not incident")]
    CycleNotClosed(Edge, Edge),
    #[error("weight of negative cycle = {0}")]
    CycleNotNegative(Distance),
    #[error("engine has {engine} vertices but graph has {graph}")]
    VertexCountMismatch { engine: usize, graph: usize },
    #[error("source has distance {distance} and predecessor {edge:?}")]
    SourceInconsistent { distance: Distance, edge: Option<Edge> },
    #[error("distance and predecessor inconsistent at vertex {vertex}")]
    PredecessorInconsistent { vertex: VertexId },
    #[error("edge {0} not relaxed")]
    EdgeNotRelaxed(Edge),
    #[error("edge {edge} stored as predecessor of vertex {vertex}")]
    PredecessorMisplaced { vertex: VertexId, edge: Edge },
    #[error("edge {0} on shortest path not tight")]
    EdgeNotTight(Edge),
}

/// Verify that `cycle` is a closed walk: each edge's head is the next edge's
/// tail, wrapping around from the last edge to the first.
pub fn check_cycle(cycle: &[Edge]) -> Result<(), OptimalityViolation> {
    let (Some(&first), Some(&last)) = (cycle.first(), cycle.last()) else {
        return Err(OptimalityViolation::EmptyCycle);
    };
    for pair in cycle.windows(2) {
        if pair[0].to() != pair[1].from() {
            return Err(OptimalityViolation::CycleNotClosed(pair[0], pair[1]));
        }
    }
    if last.to() != first.from() {
        return Err(OptimalityViolation::CycleNotClosed(last, first));
    }
    Ok(())
}

/// Verify the result of `sp`, computed over `graph`.
///
/// With a negative cycle, the witness must be a closed walk of strictly
/// negative weight. Without one:
/// - the source has distance 0 and no predecessor;
/// - every other vertex has a predecessor exactly when it was reached;
/// - `dist[w] <= dist[v] + weight` for every edge `v -> w` with `v` reached;
/// - `dist[w] == dist[v] + weight` for every predecessor edge `v -> w`.
pub fn check_optimality(graph: &Graph, sp: &BellmanFord) -> Result<(), OptimalityViolation> {
    if let Some(cycle) = sp.negative_cycle() {
        check_cycle(cycle)?;
        let weight: Distance = cycle.iter().map(|e| Distance::from(e.weight())).sum();
        if weight >= 0 {
            return Err(OptimalityViolation::CycleNotNegative(weight));
        }
        return Ok(());
    }

    if sp.vertex_count() != graph.vertex_count() {
        return Err(OptimalityViolation::VertexCountMismatch {
            engine: sp.vertex_count(),
            graph: graph.vertex_count(),
        });
    }

    let dist = &sp.dist_to;
    let edge_to = &sp.edge_to;
    let s = sp.source();

    if dist[s] != 0 || edge_to[s].is_some() {
        return Err(OptimalityViolation::SourceInconsistent {
            distance: dist[s],
            edge: edge_to[s],
        });
    }
    for v in (0..graph.vertex_count()).filter(|&v| v != s) {
        if edge_to[v].is_some() != (dist[v] < UNREACHED) {
            return Err(OptimalityViolation::PredecessorInconsistent { vertex: v });
        }
    }

    for &e in graph.edges() {
        let v = e.from();
        if dist[v] >= UNREACHED {
            continue;
        }
        if dist[v] + Distance::from(e.weight()) < dist[e.to()] {
            return Err(OptimalityViolation::EdgeNotRelaxed(e));
        }
    }

    for (w, e) in edge_to.iter().enumerate() {
        let Some(e) = *e else { continue };
        if e.to() != w {
            return Err(OptimalityViolation::PredecessorMisplaced { vertex: w, edge: e });
        }
        if dist[e.from()] + Distance::from(e.weight()) != dist[w] {
            return Err(OptimalityViolation::EdgeNotTight(e));
        }
    }

    Ok(())
}
