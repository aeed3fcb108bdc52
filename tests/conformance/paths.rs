use super::common::load_fixture;
use fieldrules::primitives::{resolve_path, write_path};
use serde_json::Value;

#[derive(Debug, serde::Deserialize)]
struct PathSuites {
    resolve: Vec<ResolveCase>,
    write: Vec<WriteCase>,
}

#[derive(Debug, serde::Deserialize)]
struct ResolveCase {
    id: String,
    name: String,
    path: String,
    state: Value,
    expected: ResolveExpected,
}

#[derive(Debug, serde::Deserialize)]
struct ResolveExpected {
    found: bool,
    #[serde(default)]
    value: Value,
}

#[derive(Debug, serde::Deserialize)]
struct WriteCase {
    id: String,
    name: String,
    path: String,
    state: Value,
    value: Value,
    expected: Value,
}

// ─── resolve_path ───────────────────────────────────────────────────────────

#[test]
fn resolve_path_suite() {
    let suites: PathSuites = load_fixture("paths.yaml");

    let mut failed = 0;
    for case in &suites.resolve {
        let result = resolve_path(&case.path, &case.state);
        let matches = if case.expected.found {
            result.as_ref() == Some(&case.expected.value)
        } else {
            result.is_none()
        };
        if !matches {
            eprintln!(
                "  FAIL [{}] {}: expected {:?}, got {:?}",
                case.id, case.name, case.expected, result
            );
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} resolve_path tests failed", failed);
}

// ─── write_path ─────────────────────────────────────────────────────────────

#[test]
fn write_path_suite() {
    let suites: PathSuites = load_fixture("paths.yaml");

    let mut failed = 0;
    for case in &suites.write {
        let mut state = case.state.clone();
        write_path(&mut state, &case.path, case.value.clone());
        if state != case.expected {
            eprintln!(
                "  FAIL [{}] {}: expected {}, got {}",
                case.id, case.name, case.expected, state
            );
            failed += 1;
        }
    }

    assert_eq!(failed, 0, "{} write_path tests failed", failed);
}
