use std::fmt;

use crate::error::{Error, Result};
use crate::types::*;

/// A directed, weighted arc `from -> to`.
///
/// Equality and hashing are structural over `(from, to, weight)`, so two
/// edges with the same triple are interchangeable inside sets and maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Edge { from, to, weight }
    }

    /// Build an edge from untyped integers, e.g. values read from text.
    ///
    /// Fails with `InvalidArgument` if either endpoint is negative or the
    /// weight does not fit in a `Weight`.
    pub fn try_new(from: i64, to: i64, weight: i64) -> Result<Self> {
        if from < 0 || to < 0 {
            return Err(Error::InvalidArgument(
                "Vertex names must be nonnegative integers".to_string(),
            ));
        }
        let from = VertexId::try_from(from)
            .map_err(|_| Error::InvalidArgument(format!("vertex {from} is too large")))?;
        let to = VertexId::try_from(to)
            .map_err(|_| Error::InvalidArgument(format!("vertex {to} is too large")))?;
        let weight = Weight::try_from(weight).map_err(|_| {
            Error::InvalidArgument(format!("weight {weight} is outside the supported range"))
        })?;
        Ok(Edge { from, to, weight })
    }

    /// Tail vertex.
    #[inline]
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Head vertex.
    #[inline]
    pub fn to(&self) -> VertexId {
        self.to
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}", self.from, self.to, self.weight)
    }
}
