use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Serialize;

use crate::driver::case_parse::{parse_test_cases, ParseError};
use crate::error::Error;
use crate::graph::Graph;
use crate::search::BellmanFord;
use crate::types::*;

/// A distance query between two cities of one test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub source: VertexId,
    pub destination: VertexId,
}

/// One parsed test case: city names indexed by vertex, the road graph, and
/// the queries in the order they were issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub cities: Vec<String>,
    pub graph: Graph,
    pub queries: Vec<Query>,
}

/// Answer to one query. `distance` is [`UNREACHED`] when no route exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub source: String,
    pub destination: String,
    pub distance: Distance,
}

impl QueryResult {
    pub fn is_reachable(&self) -> bool {
        self.distance < UNREACHED
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("test case {case}: query {source_city} -> {destination_city} failed")]
    Query {
        case: usize,
        source_city: String,
        destination_city: String,
        #[source]
        error: Error,
    },
}

/// Name of city `v`, or `#v` when the case has no such city.
fn city_name(cities: &[String], v: VertexId) -> String {
    cities.get(v).cloned().unwrap_or_else(|| format!("#{v}"))
}

/// Answer every query of every case, in issue order.
///
/// One computation is run per distinct source city of a case and shared by
/// all queries from that city. A query naming a vertex outside the case's
/// city list fails with `InvalidArgument`.
pub fn run_cases(cases: &[TestCase]) -> Result<Vec<QueryResult>, BatchError> {
    let mut results = Vec::new();
    for (case_num, case) in cases.iter().enumerate() {
        let mut engines: HashMap<VertexId, BellmanFord> = HashMap::new();
        for query in &case.queries {
            let query_error = |error: Error| BatchError::Query {
                case: case_num,
                source_city: city_name(&case.cities, query.source),
                destination_city: city_name(&case.cities, query.destination),
                error,
            };

            // Every query endpoint needs a name as well as a vertex.
            for v in [query.source, query.destination] {
                if v >= case.cities.len() {
                    return Err(query_error(Error::vertex_out_of_range(v, case.cities.len())));
                }
            }

            let sp = match engines.entry(query.source) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let sp = BellmanFord::new(&case.graph, query.source).map_err(query_error)?;
                    entry.insert(sp)
                }
            };
            let distance = sp.distance_to(query.destination).map_err(query_error)?;

            results.push(QueryResult {
                source: city_name(&case.cities, query.source),
                destination: city_name(&case.cities, query.destination),
                distance,
            });
        }
        log::debug!(
            "test case {}: answered {} queries with {} computations",
            case_num,
            case.queries.len(),
            engines.len()
        );
    }
    Ok(results)
}

/// Parse `text` as a batch of test cases and answer all their queries.
pub fn solve(text: &str) -> Result<Vec<QueryResult>, BatchError> {
    let cases = parse_test_cases(text)?;
    run_cases(&cases)
}
