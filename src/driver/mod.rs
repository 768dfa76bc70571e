pub mod batch;
pub mod case_parse;
#[cfg(feature = "cli")]
pub mod report;

pub use batch::{run_cases, solve, BatchError, Query, QueryResult, TestCase};
pub use case_parse::{parse_test_cases, ParseError};
#[cfg(feature = "cli")]
pub use report::{write_distances, write_json, write_text, FileReport};
