use rbellman::driver::{parse_test_cases, run_cases, solve, BatchError, Query, QueryResult, TestCase};
use rbellman::types::UNREACHED;
use rbellman::{Error, Graph};

const SAMPLE: &str = "\
1
4
gdansk
2
2 1
3 3
bydgoszcz
3
1 1
3 1
4 4
torun
3
1 3
2 1
4 1
warszawa
2
2 4
3 1
2
gdansk warszawa
bydgoszcz warszawa
";

fn distances(results: &[QueryResult]) -> Vec<i64> {
    results.iter().map(|r| r.distance).collect()
}

#[test]
fn solve_sample() {
    let results = solve(SAMPLE).unwrap();
    assert_eq!(distances(&results), vec![3, 2]);
    assert_eq!(results[0].source, "gdansk");
    assert_eq!(results[0].destination, "warszawa");
    assert!(results.iter().all(QueryResult::is_reachable));
}

#[test]
fn results_keep_query_order_across_cases() {
    let text = "\
2
3
a 2 2 4 3 1
b 1 3 -2
c 0
3
a c
a b
b c
2
x 1 2 7
y 0
2
y x
x y
";
    let results = solve(text).unwrap();
    assert_eq!(distances(&results), vec![1, 4, -2, UNREACHED, 7]);
    assert!(!results[3].is_reachable());
    assert_eq!(results[3].source, "y");
}

#[test]
fn negative_cycle_aborts_the_run() {
    let text = "1\n3\na 1 2 5\nb 1 3 -10\nc 1 1 3\n2\na b\nb c\n";
    match solve(text) {
        Err(BatchError::Query {
            case,
            source_city,
            destination_city,
            error,
        }) => {
            assert_eq!(case, 0);
            assert_eq!(source_city, "a");
            assert_eq!(destination_city, "b");
            assert_eq!(error, Error::NegativeCycleDetected);
        }
        other => panic!("expected a query failure, got {other:?}"),
    }
}

#[test]
fn parse_errors_surface() {
    assert!(matches!(solve("1\n1\na 0\n1\na q"), Err(BatchError::Parse(_))));
}

#[test]
fn query_outside_city_list_is_invalid_argument() {
    let cases = vec![TestCase {
        cities: vec!["a".to_string(), "b".to_string()],
        graph: Graph::new(2),
        queries: vec![Query {
            source: 0,
            destination: 5,
        }],
    }];
    match run_cases(&cases) {
        Err(BatchError::Query {
            case,
            source_city,
            destination_city,
            error: Error::InvalidArgument(msg),
        }) => {
            assert_eq!(case, 0);
            assert_eq!(source_city, "a");
            assert_eq!(destination_city, "#5");
            assert_eq!(msg, "vertex 5 is not between 0 and 1");
        }
        other => panic!("expected an invalid argument, got {other:?}"),
    }
}

#[test]
fn query_on_city_without_vertex_is_invalid_argument() {
    // More names than vertices: the name lookup succeeds, the engine rejects it.
    let cases = vec![TestCase {
        cities: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        graph: Graph::new(2),
        queries: vec![Query {
            source: 2,
            destination: 0,
        }],
    }];
    assert!(matches!(
        run_cases(&cases),
        Err(BatchError::Query {
            error: Error::InvalidArgument(_),
            ..
        })
    ));
}

#[test]
fn run_cases_on_parsed_input() {
    let cases = parse_test_cases(SAMPLE).unwrap();
    let first = run_cases(&cases).unwrap();
    let second = run_cases(&cases).unwrap();
    assert_eq!(first, second);
}

#[test]
fn results_serialize_to_json() {
    let results = solve("1\n2\na 1 2 -3\nb 0\n1\na b\n").unwrap();
    assert_eq!(
        serde_json::to_string(&results).unwrap(),
        r#"[{"source":"a","destination":"b","distance":-3}]"#
    );
}
