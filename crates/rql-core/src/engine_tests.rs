//! Tests for engine module

use serde_json::{json, Value};

use crate::config::{PaginationConfig, ParserConfig, RqlConfig};
use crate::engine::*;
use crate::error::Error;
use crate::pager::FilterOptions;
use crate::rql::ParseErrorKind;

fn people() -> Vec<Value> {
    vec![
        json!({"ID": 1, "Name": "Alice", "Age": 25}),
        json!({"ID": 2, "Name": "Bob", "Age": 30}),
        json!({"ID": 3, "Name": "Carol", "Age": 35}),
        json!({"ID": 4, "Name": "Dave", "Age": 40}),
    ]
}

fn ids(items: &[Value]) -> Vec<i64> {
    items.iter().filter_map(|v| v["ID"].as_i64()).collect()
}

// ========================================================================
// apply_filter
// ========================================================================

#[test]
fn test_apply_filter_basic() {
    // Arrange & Act
    let result = apply_filter("Age >= 30", people(), FilterOptions::default()).unwrap();

    // Assert
    assert_eq!(result.count, 3);
    assert_eq!(ids(&result.items), vec![2, 3, 4]);
}

#[test]
fn test_apply_filter_empty_text_returns_all() {
    let result = apply_filter("", people(), FilterOptions::default()).unwrap();

    assert_eq!(result.count, 4);
    assert_eq!(result.items.len(), 4);
}

#[test]
fn test_apply_filter_count_ignores_pagination() {
    let result = apply_filter("Age > 20", people(), FilterOptions::new(1, 2)).unwrap();

    assert_eq!(result.count, 4);
    assert_eq!(ids(&result.items), vec![3]);
}

#[test]
fn test_apply_filter_offset_past_matches() {
    let result = apply_filter("Age > 20", people(), FilterOptions::new(0, 10)).unwrap();

    assert_eq!(result.count, 4);
    assert!(result.is_empty());
}

#[test]
fn test_apply_filter_no_matches() {
    let result = apply_filter("Salary > 0", people(), FilterOptions::default()).unwrap();

    assert_eq!(result.count, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_apply_filter_syntax_error() {
    let err = apply_filter("Age >=", people(), FilterOptions::default()).unwrap_err();

    assert_eq!(err.code(), "RQL-001");
    assert_eq!(
        err.as_parse_error().map(|e| e.kind),
        Some(ParseErrorKind::SyntaxError)
    );
}

#[test]
fn test_apply_filter_deep_nesting_is_rejected() {
    // Arrange
    let text = format!("{}Age = 25{}", "(".repeat(500), ")".repeat(500));

    // Act
    let err = apply_filter(&text, people(), FilterOptions::default()).unwrap_err();

    // Assert
    assert_eq!(err.code(), "RQL-001");
    assert_eq!(
        err.as_parse_error().map(|e| e.kind),
        Some(ParseErrorKind::NestingTooDeep)
    );
}

#[test]
fn test_apply_filter_quoted_left_operand_matches_nothing() {
    let result = apply_filter("'Alice' = Name", people(), FilterOptions::default()).unwrap();

    assert_eq!(result.count, 0);
    assert!(result.items.is_empty());
}

#[test]
fn test_apply_filter_unicode_bare_literal() {
    let items = vec![json!({"Name": "José"}), json!({"Name": "Jose"})];

    let result = apply_filter("Name = José", items, FilterOptions::default()).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.items[0]["Name"], "José");
}

#[test]
fn test_apply_filter_does_not_decode() {
    // `%41` is a LIKE pattern here, not an escape for "A"
    let items = vec![json!({"Code": "x%41"}), json!({"Code": "xA"})];

    let result = apply_filter("Code LIKE '%%41'", items, FilterOptions::default()).unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.items[0]["Code"], "x%41");
}

#[test]
fn test_apply_filter_on_empty_collection() {
    let result = apply_filter("Age > 1", Vec::<Value>::new(), FilterOptions::default()).unwrap();

    assert_eq!(result.count, 0);
}

// ========================================================================
// FilterEngine
// ========================================================================

#[test]
fn test_engine_default_behaves_like_apply_filter() {
    let engine = FilterEngine::default();

    let from_engine = engine.apply("Name LIKE '%o%'", people(), None).unwrap();
    let plain = apply_filter("Name LIKE '%o%'", people(), FilterOptions::default()).unwrap();

    assert_eq!(from_engine, plain);
    assert_eq!(ids(&from_engine.items), vec![2, 3]);
}

#[test]
fn test_engine_rejects_invalid_config() {
    let config = RqlConfig {
        pagination: PaginationConfig {
            default_limit: 50,
            max_limit: 10,
        },
        ..Default::default()
    };

    let err = FilterEngine::new(config).unwrap_err();
    assert_eq!(err.code(), "RQL-003");
}

#[test]
fn test_engine_default_limit_applies_without_options() {
    let engine = FilterEngine::new(RqlConfig {
        pagination: PaginationConfig {
            default_limit: 2,
            max_limit: 0,
        },
        ..Default::default()
    })
    .unwrap();

    let result = engine.apply("", people(), None).unwrap();
    assert_eq!(result.count, 4);
    assert_eq!(ids(&result.items), vec![1, 2]);

    // Explicit options win over the default
    let result = engine.apply("", people(), Some(FilterOptions::new(3, 0))).unwrap();
    assert_eq!(result.items.len(), 3);
}

#[test]
fn test_engine_max_limit_clamps() {
    let engine = FilterEngine::new(RqlConfig {
        pagination: PaginationConfig {
            default_limit: 0,
            max_limit: 2,
        },
        ..Default::default()
    })
    .unwrap();

    let unbounded = engine.apply("", people(), Some(FilterOptions::default())).unwrap();
    assert_eq!(unbounded.items.len(), 2);

    let oversized = engine.apply("", people(), Some(FilterOptions::new(3, 1))).unwrap();
    assert_eq!(ids(&oversized.items), vec![2, 3]);
    assert_eq!(oversized.count, 4);
}

#[test]
fn test_engine_max_filter_length() {
    let engine = FilterEngine::new(RqlConfig {
        parser: ParserConfig {
            max_filter_length: 10,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    assert!(engine.compile("Age > 1").is_ok());

    let err = engine.compile("Name = 'a long name'").unwrap_err();
    let parse_error = err.as_parse_error().expect("parse error");
    assert_eq!(parse_error.kind, ParseErrorKind::FilterTooLong);
}

#[test]
fn test_engine_unbounded_filter_length() {
    let engine = FilterEngine::new(RqlConfig {
        parser: ParserConfig {
            max_filter_length: 0,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let text = vec!["Age > 1"; 1000].join(" OR ");
    assert!(engine.compile(&text).is_ok());
}

#[test]
fn test_engine_percent_decoding() {
    let engine = FilterEngine::new(RqlConfig {
        parser: ParserConfig {
            decode_percent_escapes: true,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let result = engine
        .apply("Name%20%3D%20%27Bob%27", people(), None)
        .unwrap();

    assert_eq!(ids(&result.items), vec![2]);
}

#[test]
fn test_engine_percent_decoding_invalid_utf8() {
    let engine = FilterEngine::new(RqlConfig {
        parser: ParserConfig {
            decode_percent_escapes: true,
            ..Default::default()
        },
        ..Default::default()
    })
    .unwrap();

    let err = engine.apply("Name = '%FF'", people(), None).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert_eq!(err.code(), "RQL-002");
}

#[test]
fn test_engine_compiled_filter_is_reusable() {
    let engine = FilterEngine::default();
    let filter = engine.compile("Age < 35").unwrap();

    let first = filter.apply(people(), &FilterOptions::default());
    let second = filter.apply(people(), &FilterOptions::default());

    assert_eq!(first, second);
    assert_eq!(first.count, 2);
}
