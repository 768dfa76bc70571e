use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::graph::{Edge, Graph};
use crate::search::cycle_finder::CycleFinder;
use crate::types::*;

/// Single-source shortest paths with negative weights, using the
/// queue-based Bellman-Ford algorithm.
///
/// The whole computation runs inside [`BellmanFord::new`]; afterwards the
/// instance is read-only. Every `vertex_count` edge examinations, the
/// predecessor subgraph is searched for a cycle. Any cycle there has negative
/// total weight, so finding one ends the computation and makes every distance
/// query fail.
///
/// The graph is only borrowed during construction. Several computations may
/// read the same graph concurrently.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    source: VertexId,
    pub(crate) dist_to: Vec<Distance>,
    pub(crate) edge_to: Vec<Option<Edge>>,
    cycle: Option<Vec<Edge>>,
}

// ---------------------------------------------------------------------------
// Relaxation loop
// ---------------------------------------------------------------------------

/// Mutable state that only lives while the relaxation loop runs.
struct Relaxation<'g> {
    graph: &'g Graph,
    dist_to: Vec<Distance>,
    edge_to: Vec<Option<Edge>>,
    on_queue: Vec<bool>,
    queue: VecDeque<VertexId>,
    /// Edges examined so far; drives the periodic cycle check.
    cost: usize,
    cycle: Option<Vec<Edge>>,
}

impl<'g> Relaxation<'g> {
    fn new(graph: &'g Graph, source: VertexId) -> Self {
        let n = graph.vertex_count();
        let mut dist_to = vec![UNREACHED; n];
        dist_to[source] = 0;
        let mut on_queue = vec![false; n];
        on_queue[source] = true;
        Relaxation {
            graph,
            dist_to,
            edge_to: vec![None; n],
            on_queue,
            queue: VecDeque::from([source]),
            cost: 0,
            cycle: None,
        }
    }

    fn run(&mut self) -> Result<()> {
        while self.cycle.is_none() {
            let Some(v) = self.queue.pop_front() else {
                break;
            };
            self.on_queue[v] = false;
            self.relax(v)?;
        }
        Ok(())
    }

    /// Relax every edge leaving `v`, queueing heads whose distance improved.
    fn relax(&mut self, v: VertexId) -> Result<()> {
        let graph = self.graph;
        let n = graph.vertex_count();
        for &edge in graph.out_edges(v) {
            let w = edge.to();
            let candidate = self.dist_to[v] + Distance::from(edge.weight());
            if candidate < self.dist_to[w] {
                self.dist_to[w] = candidate;
                self.edge_to[w] = Some(edge);
                if !self.on_queue[w] {
                    self.queue.push_back(w);
                    self.on_queue[w] = true;
                }
            }

            let due = self.cost % n == 0;
            self.cost += 1;
            if due {
                self.find_negative_cycle()?;
                if self.cycle.is_some() {
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    /// Search the graph made of the current predecessor edges for a cycle.
    fn find_negative_cycle(&mut self) -> Result<()> {
        let predecessors: Vec<Edge> = self.edge_to.iter().flatten().copied().collect();
        let mut tree = Graph::new(self.edge_to.len());
        tree.add_edges(&predecessors)?;
        log::trace!("checking predecessor subgraph after {} edge examinations", self.cost);

        self.cycle = CycleFinder::new(&tree).into_cycle();
        if let Some(cycle) = &self.cycle {
            log::debug!(
                "negative cycle of {} edges found after {} edge examinations",
                cycle.len(),
                self.cost
            );
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

impl BellmanFord {
    /// Compute shortest paths from `source` to every vertex of `graph`.
    ///
    /// Fails with `InvalidArgument` if `source` is not a vertex of `graph`.
    pub fn new(graph: &Graph, source: VertexId) -> Result<Self> {
        if source >= graph.vertex_count() {
            return Err(Error::vertex_out_of_range(source, graph.vertex_count()));
        }

        let mut relaxation = Relaxation::new(graph, source);
        relaxation.run()?;

        Ok(BellmanFord {
            source,
            dist_to: relaxation.dist_to,
            edge_to: relaxation.edge_to,
            cycle: relaxation.cycle,
        })
    }

    #[inline]
    pub fn source(&self) -> VertexId {
        self.source
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    fn validate_vertex(&self, v: VertexId) -> Result<()> {
        if v >= self.vertex_count() {
            return Err(Error::vertex_out_of_range(v, self.vertex_count()));
        }
        Ok(())
    }

    /// Whether a negative cycle reachable from the source was found.
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The witness cycle, in traversal order, if one was found.
    pub fn negative_cycle(&self) -> Option<&[Edge]> {
        self.cycle.as_deref()
    }

    /// Length of a shortest path from the source to `v`, or [`UNREACHED`]
    /// if no path exists.
    ///
    /// Fails with `NegativeCycleDetected` for every `v` once a negative cycle
    /// was found, whether or not `v` lies downstream of it.
    pub fn distance_to(&self, v: VertexId) -> Result<Distance> {
        self.validate_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycleDetected);
        }
        Ok(self.dist_to[v])
    }

    pub fn has_path_to(&self, v: VertexId) -> Result<bool> {
        self.validate_vertex(v)?;
        Ok(self.dist_to[v] < UNREACHED)
    }

    /// Last edge on the best known path to `v`. `None` for the source and
    /// for unreached vertices.
    pub fn edge_to(&self, v: VertexId) -> Result<Option<Edge>> {
        self.validate_vertex(v)?;
        Ok(self.edge_to[v])
    }

    /// Edges of a shortest path from the source to `v`, in path order.
    /// `None` if `v` is unreached.
    pub fn path_to(&self, v: VertexId) -> Result<Option<Vec<Edge>>> {
        self.validate_vertex(v)?;
        if self.has_negative_cycle() {
            return Err(Error::NegativeCycleDetected);
        }
        if self.dist_to[v] >= UNREACHED {
            return Ok(None);
        }
        let mut path = Vec::new();
        let mut current = self.edge_to[v];
        while let Some(edge) = current {
            path.push(edge);
            current = self.edge_to[edge.from()];
        }
        path.reverse();
        Ok(Some(path))
    }
}
