pub mod digraph;
pub mod edge;

pub use digraph::Graph;
pub use edge::Edge;
