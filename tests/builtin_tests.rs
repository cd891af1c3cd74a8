// tests/builtin_tests.rs

use predicate_lang::builtins;
use predicate_lang::{Data, ErrorKind, FunctionTable};
use rstest::rstest;
use serde_json::json;

fn data(value: serde_json::Value) -> Data {
    Data::from(value)
}

// ============================================================================
// @len / @array
// ============================================================================

#[test]
fn test_len_counts_elements() {
    let test_cases = vec![
        (json!([]), 0),
        (json!([1]), 1),
        (json!(["a", {"b": 1}, null]), 3),
    ];

    for (input, expected) in test_cases {
        assert_eq!(
            builtins::len(&[data(input.clone())]).unwrap(),
            Data::Integer(expected),
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_array_collects_arguments() {
    let args = vec![Data::Float(1.0), Data::from("two"), Data::Nil];
    assert_eq!(builtins::array(&args).unwrap(), Data::Array(args.clone()));
    assert_eq!(builtins::array(&[]).unwrap(), Data::Array(vec![]));
}

// ============================================================================
// @select
// ============================================================================

#[test]
fn test_select_filters_in_order() {
    let items = data(json!([5, 1, 4, 2, 3]));
    let result = builtins::select(&[items, Data::from("$ > 2")]).unwrap();
    assert_eq!(result, data(json!([5, 4, 3])));
}

#[test]
fn test_select_on_object_elements() {
    let items = data(json!([
        {"port": 22, "open": true},
        {"port": 80, "open": false},
        {"port": 443, "open": true},
    ]));
    let result = builtins::select(&[items, Data::from("$open && $port > 100")]).unwrap();
    assert_eq!(result, data(json!([{"port": 443, "open": true}])));
}

#[test]
fn test_select_predicate_can_call_builtins() {
    let items = data(json!([1, 2]));
    let result = builtins::select(&[items, Data::from("@in(@array(1), $)")]).unwrap();
    assert_eq!(result, data(json!([1])));
}

#[test]
fn test_select_bad_predicate_is_syntax_error() {
    let items = data(json!([1]));
    let err = builtins::select(&[items, Data::from("$ ==")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_select_empty_array_still_checks_predicate() {
    let err = builtins::select(&[Data::Array(vec![]), Data::from("(")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

// ============================================================================
// @in / @has / @match
// ============================================================================

#[rstest]
#[case::number(json!([1, 2, 3]), Data::Float(2.0), true)]
#[case::number_absent(json!([1, 2, 3]), Data::Float(4.0), false)]
#[case::string(json!(["zip", "foo"]), Data::from("foo"), true)]
#[case::bool(json!([false]), Data::Bool(false), true)]
#[case::empty(json!([]), Data::Float(1.0), false)]
fn test_in(#[case] items: serde_json::Value, #[case] needle: Data, #[case] expected: bool) {
    assert_eq!(
        builtins::contains(&[data(items), needle]).unwrap(),
        Data::Bool(expected)
    );
}

#[test]
fn test_in_with_object_elements_is_unsupported() {
    let err = builtins::contains(&[data(json!([{"a": 1}])), Data::Float(1.0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedType);
}

#[test]
fn test_in_requires_array() {
    let err = builtins::contains(&[Data::from("abc"), Data::from("a")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_has() {
    let obj = data(json!({"present": 1, "empty": null}));
    let has = |key: &str| builtins::has(&[obj.clone(), Data::from(key)]).unwrap();

    assert_eq!(has("present"), Data::Bool(true));
    assert_eq!(has("empty"), Data::Bool(true));
    assert_eq!(has("absent"), Data::Bool(false));
}

#[test]
fn test_has_requires_object_and_string() {
    let err = builtins::has(&[data(json!([1])), Data::from("a")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = builtins::has(&[data(json!({})), Data::Float(1.0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[rstest]
#[case::ip_address("10.10.10.10", r"^([0-9]{1,3}\.){3}[0-9]{1,3}$", true)]
#[case::not_ip("10.10.10", r"^([0-9]{1,3}\.){3}[0-9]{1,3}$", false)]
#[case::unanchored("prefix-web-1", r"web-\d", true)]
#[case::empty_pattern("anything", "", true)]
fn test_match(#[case] text: &str, #[case] pattern: &str, #[case] expected: bool) {
    assert_eq!(
        builtins::matches(&[Data::from(text), Data::from(pattern)]).unwrap(),
        Data::Bool(expected)
    );
}

#[test]
fn test_match_requires_strings() {
    let err = builtins::matches(&[Data::Float(1.0), Data::from(".")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

// ============================================================================
// Arity
// ============================================================================

#[test]
fn test_wrong_arity_is_syntax_error() {
    let one = [Data::Nil];
    let three = [Data::Nil, Data::Nil, Data::Nil];

    let test_cases: Vec<(&str, Result<Data, predicate_lang::Error>)> = vec![
        ("@len", builtins::len(&three)),
        ("@select", builtins::select(&one)),
        ("@in", builtins::contains(&three)),
        ("@has", builtins::has(&one)),
        ("@match", builtins::matches(&[])),
    ];

    for (name, result) in test_cases {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax, "Failed for {}", name);
        assert!(err.to_string().contains(name), "Failed for {}", name);
    }
}

#[test]
fn test_builtin_table_is_shared() {
    let a = FunctionTable::builtins();
    let b = FunctionTable::builtins();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    for name in ["@len", "@select", "@array", "@in", "@has", "@match"] {
        assert!(a.contains(name), "missing {}", name);
    }
}
