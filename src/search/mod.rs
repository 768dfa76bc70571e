pub mod bellman_ford;
pub mod check;
pub mod cycle_finder;

pub use bellman_ford::BellmanFord;
pub use check::{check_cycle, check_optimality, OptimalityViolation};
pub use cycle_finder::CycleFinder;
