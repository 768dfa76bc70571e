use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::graph::edge::Edge;
use crate::types::*;

/// Edge-weighted directed graph over a fixed set of vertices `0..vertex_count`.
///
/// Each vertex owns its outgoing edges. Inserting an edge that is
/// structurally equal to one already stored is a no-op, and `edge_count`
/// reports unique stored edges only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    stored: HashSet<Edge>,
}

impl Graph {
    /// Empty graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); vertex_count],
            stored: HashSet::new(),
        }
    }

    /// Like `new`, but for an untyped count. Negative counts are rejected.
    pub fn try_new(vertex_count: i64) -> Result<Self> {
        if vertex_count < 0 {
            return Err(Error::InvalidArgument(
                "Number of vertices in a Digraph must be nonnegative".to_string(),
            ));
        }
        let vertex_count = usize::try_from(vertex_count).map_err(|_| {
            Error::InvalidArgument(format!("vertex count {vertex_count} is too large"))
        })?;
        Ok(Graph::new(vertex_count))
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of unique edges stored.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.stored.len()
    }

    fn validate_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.vertex_count() {
            return Err(Error::vertex_out_of_range(vertex, self.vertex_count()));
        }
        Ok(())
    }

    fn validate_edge(&self, edge: &Edge) -> Result<()> {
        self.validate_vertex(edge.from())?;
        self.validate_vertex(edge.to())
    }

    /// Insert `edge` into its tail's outgoing set.
    ///
    /// Returns whether the edge was new.
    pub fn add_edge(&mut self, edge: Edge) -> Result<bool> {
        self.validate_edge(&edge)?;
        Ok(self.insert(edge))
    }

    /// Insert every edge of `edges`. The whole batch is validated before
    /// anything is inserted, so a failure leaves the graph unchanged.
    pub fn add_edges(&mut self, edges: &[Edge]) -> Result<()> {
        for edge in edges {
            self.validate_edge(edge)?;
        }
        for &edge in edges {
            self.insert(edge);
        }
        Ok(())
    }

    fn insert(&mut self, edge: Edge) -> bool {
        if !self.stored.insert(edge) {
            return false;
        }
        self.adjacency[edge.from()].push(edge);
        true
    }

    /// Outgoing edges of `vertex`.
    ///
    /// Callers must not depend on the order of the returned slice.
    pub fn adjacent(&self, vertex: VertexId) -> Result<&[Edge]> {
        self.validate_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Outgoing edges of an already validated vertex.
    #[inline]
    pub(crate) fn out_edges(&self, vertex: VertexId) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Every stored edge, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.iter().flatten()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.vertex_count(), self.edge_count())?;
        for (vertex, edges) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for edge in edges {
                write!(f, "  {edge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
