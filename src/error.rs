#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Out-of-range vertex, negative vertex count, negative endpoint or a
    /// weight that does not fit `Weight`.
    #[error("{0}")]
    InvalidArgument(String),
    /// A distance was requested from a computation that found a negative cycle
    /// reachable from its source.
    #[error("Negative cost cycle exists")]
    NegativeCycleDetected,
}

impl Error {
    pub(crate) fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        if vertex_count == 0 {
            Error::InvalidArgument(format!("vertex {vertex} is out of range for an empty graph"))
        } else {
            Error::InvalidArgument(format!(
                "vertex {vertex} is not between 0 and {}",
                vertex_count - 1
            ))
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
