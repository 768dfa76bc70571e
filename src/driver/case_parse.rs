use std::collections::HashMap;

use crate::driver::batch::{Query, TestCase};
use crate::error::Error;
use crate::graph::{Edge, Graph};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("bad {expected}: `{token}` is not an integer")]
    InvalidInteger { token: String, expected: &'static str },
    #[error("{what} must be nonnegative, got {value}")]
    NegativeCount { what: &'static str, value: i64 },
    #[error("unknown city `{0}`")]
    UnknownCity(String),
    #[error("city `{0}` declared twice")]
    DuplicateCity(String),
    #[error(transparent)]
    Graph(#[from] Error),
}

/// Whitespace-separated token stream over the input text.
struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens { inner: text.split_whitespace() }
    }

    fn word(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.inner.next().ok_or(ParseError::UnexpectedEof { expected })
    }

    fn integer(&mut self, expected: &'static str) -> Result<i64, ParseError> {
        let token = self.word(expected)?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            token: token.to_string(),
            expected,
        })
    }

    fn count(&mut self, what: &'static str) -> Result<usize, ParseError> {
        let value = self.integer(what)?;
        usize::try_from(value).map_err(|_| ParseError::NegativeCount { what, value })
    }
}

/// Parse a batch of shortest-path test cases.
///
/// Layout (whitespace-separated, line breaks are not significant):
/// a test count, then per test case a city count, each city's name followed
/// by its neighbour count and `(neighbour, weight)` pairs, then a query count
/// and `(source, destination)` city-name pairs. Neighbour indices are 1-based.
pub fn parse_test_cases(text: &str) -> Result<Vec<TestCase>, ParseError> {
    let mut tokens = Tokens::new(text);
    let num_tests = tokens.count("test count")?;
    let mut cases = Vec::new();
    for test in 0..num_tests {
        let case = parse_test_case(&mut tokens)?;
        log::debug!(
            "parsed test case {}: {} cities, {} edges, {} queries",
            test,
            case.cities.len(),
            case.graph.edge_count(),
            case.queries.len()
        );
        cases.push(case);
    }
    Ok(cases)
}

fn parse_test_case(tokens: &mut Tokens<'_>) -> Result<TestCase, ParseError> {
    let num_cities = tokens.count("city count")?;
    let mut cities = Vec::new();
    let mut city_index = HashMap::new();
    let mut edges = Vec::new();

    for city in 0..num_cities {
        let name = tokens.word("city name")?;
        if city_index.insert(name.to_string(), city).is_some() {
            return Err(ParseError::DuplicateCity(name.to_string()));
        }
        cities.push(name.to_string());

        let num_neighbours = tokens.count("neighbour count")?;
        for _ in 0..num_neighbours {
            let neighbour = tokens.integer("neighbour index")?;
            let weight = tokens.integer("edge weight")?;
            // Cities are numbered from 1 in the input.
            edges.push(Edge::try_new(city as i64, neighbour.saturating_sub(1), weight)?);
        }
    }

    let mut graph = Graph::new(num_cities);
    graph.add_edges(&edges)?;

    let num_queries = tokens.count("query count")?;
    let mut queries = Vec::new();
    for _ in 0..num_queries {
        let source = lookup(&city_index, tokens.word("source city")?)?;
        let destination = lookup(&city_index, tokens.word("destination city")?)?;
        queries.push(Query { source, destination });
    }

    Ok(TestCase { cities, graph, queries })
}

fn lookup(city_index: &HashMap<String, usize>, name: &str) -> Result<usize, ParseError> {
    city_index
        .get(name)
        .copied()
        .ok_or_else(|| ParseError::UnknownCity(name.to_string()))
}
