pub mod types;
pub mod error;
pub mod graph;
pub mod search;
pub mod driver;

pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use search::BellmanFord;
