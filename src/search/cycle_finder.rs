use crate::graph::{Edge, Graph};
use crate::types::*;

// ---------------------------------------------------------------------------
// Explicit DFS stack
// ---------------------------------------------------------------------------

/// One pending vertex of the depth-first search: the vertex and the index of
/// the next outgoing edge to examine.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next: usize,
}

// ---------------------------------------------------------------------------
// Cycle finder
// ---------------------------------------------------------------------------

/// Finds one directed cycle in a graph, or determines that none exists.
///
/// Depth-first search from every unmarked vertex, driven by an explicit
/// heap-allocated stack so that deep graphs cannot overflow the call stack.
/// The first back edge found closes the reported cycle.
#[derive(Debug)]
pub struct CycleFinder {
    marked: Vec<bool>,
    on_stack: Vec<bool>,
    edge_to: Vec<Option<Edge>>,
    cycle: Option<Vec<Edge>>,
}

impl CycleFinder {
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut finder = CycleFinder {
            marked: vec![false; n],
            on_stack: vec![false; n],
            edge_to: vec![None; n],
            cycle: None,
        };
        for root in 0..n {
            if finder.cycle.is_some() {
                break;
            }
            if !finder.marked[root] {
                finder.dfs(graph, root);
            }
        }
        finder
    }

    fn dfs(&mut self, graph: &Graph, root: VertexId) {
        self.marked[root] = true;
        self.on_stack[root] = true;
        let mut stack = vec![Frame { vertex: root, next: 0 }];

        while let Some(&Frame { vertex, next }) = stack.last() {
            let Some(&edge) = graph.out_edges(vertex).get(next) else {
                self.on_stack[vertex] = false;
                stack.pop();
                continue;
            };
            let top = stack.len() - 1;
            stack[top].next += 1;

            let w = edge.to();
            if !self.marked[w] {
                self.edge_to[w] = Some(edge);
                self.marked[w] = true;
                self.on_stack[w] = true;
                stack.push(Frame { vertex: w, next: 0 });
            } else if self.on_stack[w] {
                self.cycle = Some(self.trace_back(edge));
                return;
            }
        }
    }

    /// Walk entry edges backward from the closing edge `v -> w` until the
    /// walk returns to `w`. The result starts at `w` and ends with `closing`.
    fn trace_back(&self, closing: Edge) -> Vec<Edge> {
        let w = closing.to();
        let mut cycle = Vec::new();
        let mut f = closing;
        while f.from() != w {
            cycle.push(f);
            f = self.edge_to[f.from()].expect("vertex on the search stack has an entry edge");
        }
        cycle.push(f);
        cycle.reverse();
        cycle
    }

    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// The cycle as edges in traversal order: each edge's head is the next
    /// edge's tail, and the last edge's head is the first edge's tail.
    pub fn cycle(&self) -> Option<&[Edge]> {
        self.cycle.as_deref()
    }

    pub fn into_cycle(self) -> Option<Vec<Edge>> {
        self.cycle
    }
}
