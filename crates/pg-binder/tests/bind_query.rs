//! Tests for single-statement named-parameter binding.

use pg_binder::{bind_query, bind_query_from, BindError, BindParams, BindValue};

fn text_of(value: &str) -> BindValue {
    BindValue::Text(String::from(value))
}

#[test]
fn missing_substitutions_is_an_error() {
    let result = bind_query("SELECT * FROM table", None);
    assert_eq!(result.unwrap_err(), BindError::MissingSubstitutions);
}

#[test]
fn statement_without_parameters_is_untouched() {
    let params = BindParams::new().with("unused", 1_i64);
    let bound = bind_query("SELECT * FROM table WHERE id = 7", Some(&params)).unwrap();
    assert_eq!(bound.text, "SELECT * FROM table WHERE id = 7");
    assert!(bound.values.is_empty());
}

#[test]
fn already_positional_text_is_idempotent() {
    let params = BindParams::new();
    let bound = bind_query("SELECT * FROM table WHERE id = $1", Some(&params)).unwrap();
    assert_eq!(bound.text, "SELECT * FROM table WHERE id = $1");
    assert!(bound.values.is_empty());
}

#[test]
fn binds_parameters_and_keeps_casts() {
    let params = BindParams::new().with("b", 2_i64).with("a", 1_i64);
    let bound = bind_query("SELECT ':a'::int, ':b'::text", Some(&params)).unwrap();

    assert_eq!(bound.text, "SELECT '$1'::int, '$2'::text");
    assert_eq!(bound.values, vec![BindValue::Int(1), BindValue::Int(2)]);
}

#[test]
fn cast_marker_never_contributes_a_binding() {
    let params = BindParams::new().with("int", 9_i64);
    let bound = bind_query("SELECT id::int FROM t", Some(&params)).unwrap();
    assert_eq!(bound.text, "SELECT id::int FROM t");
    assert!(bound.values.is_empty());
}

#[test]
fn multiline_statement_binds_in_first_occurrence_order() {
    let query = "
            SELECT b, ':b'::text, :c
            FROM table
            WHERE a = :a";
    let expected = "
            SELECT b, '$1'::text, $2
            FROM table
            WHERE a = $3";

    let params = BindParams::new()
        .with("a", 1_i64)
        .with("b", 2_i64)
        .with("c", 2_i64);
    let bound = bind_query(query, Some(&params)).unwrap();

    assert_eq!(bound.text, expected);
    assert_eq!(
        bound.values,
        vec![BindValue::Int(2), BindValue::Int(2), BindValue::Int(1)],
    );
}

#[test]
fn repeated_name_reuses_its_index() {
    let params = BindParams::new().with("id", 3_i64);
    let bound = bind_query("SELECT * FROM t WHERE a = :id OR b = :id", Some(&params)).unwrap();

    assert_eq!(bound.text, "SELECT * FROM t WHERE a = $1 OR b = $1");
    assert_eq!(bound.values, vec![BindValue::Int(3)]);
}

#[test]
fn names_are_case_sensitive() {
    let params = BindParams::new().with("a", 1_i64).with("A", 2_i64);
    let bound = bind_query("SELECT :a, :A", Some(&params)).unwrap();

    assert_eq!(bound.text, "SELECT $1, $2");
    assert_eq!(bound.values, vec![BindValue::Int(1), BindValue::Int(2)]);
}

#[test]
fn unmatched_name_silently_binds_null() {
    let params = BindParams::new().with("known", text_of("v"));
    let bound = bind_query("SELECT :known, :unknown", Some(&params)).unwrap();

    assert_eq!(bound.text, "SELECT $1, $2");
    assert_eq!(bound.values, vec![text_of("v"), BindValue::Null]);
}

#[test]
fn start_index_composes_binder_calls() {
    let first = BindParams::new().with("a", 1_i64);
    let second = BindParams::new().with("b", 2_i64);

    let head = bind_query("WHERE a = :a", Some(&first)).unwrap();
    let tail = bind_query_from(
        "AND b = :b",
        Some(&second),
        1 + head.values.len(),
    )
    .unwrap();

    assert_eq!(head.text, "WHERE a = $1");
    assert_eq!(tail.text, "AND b = $2");
}

#[test]
fn into_parts_yields_text_and_values() {
    let params = BindParams::new().with("id", 1_i64);
    let (text, values) = bind_query("WHERE id = :id", Some(&params))
        .unwrap()
        .into_parts();

    assert_eq!(text, "WHERE id = $1");
    assert_eq!(values, vec![BindValue::Int(1)]);
}
