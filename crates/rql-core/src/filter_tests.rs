//! Tests for filter module

#[cfg(test)]
mod tests {
    use crate::filter::*;
    use crate::pager::FilterOptions;
    use crate::rql::{CompareOp, Comparison, Literal, Parser};
    use serde_json::json;

    // =========================================================================
    // Equality
    // =========================================================================

    #[test]
    fn test_filter_equality_string() {
        // Arrange
        let filter = Filter::new(Condition::eq("category", "tech"));
        let payload = json!({"category": "tech", "price": 100});

        // Act & Assert
        assert!(filter.matches(&payload));
    }

    #[test]
    fn test_filter_equality_string_no_match() {
        // Arrange
        let filter = Filter::new(Condition::eq("category", "tech"));
        let payload = json!({"category": "science", "price": 100});

        // Act & Assert
        assert!(!filter.matches(&payload));
    }

    #[test]
    fn test_filter_equality_number_compares_text() {
        // Arrange
        let filter = Filter::new(Condition::eq("price", "100"));

        // Act & Assert
        assert!(filter.matches(&json!({"price": 100})));
        assert!(filter.matches(&json!({"price": "100"})));
        // Equality is textual: 100.0 prints as "100" but "100.0" text does not
        assert!(filter.matches(&json!({"price": 100.0})));
        assert!(!filter.matches(&json!({"price": "100.0"})));
    }

    #[test]
    fn test_filter_not_equal() {
        // Arrange
        let filter = Filter::new(Condition::ne("status", "deleted"));

        // Act & Assert
        assert!(filter.matches(&json!({"status": "active"})));
        assert!(!filter.matches(&json!({"status": "deleted"})));
    }

    #[test]
    fn test_filter_bool_field() {
        let filter = Filter::parse("Active = true").unwrap();

        assert!(filter.matches(&json!({"Active": true})));
        assert!(!filter.matches(&json!({"Active": false})));
    }

    // =========================================================================
    // Ordering comparisons
    // =========================================================================

    #[test]
    fn test_filter_range_numeric() {
        // Arrange
        let payload = json!({"Age": 40});

        // Act & Assert
        assert!(Condition::ge("Age", "40").matches(&payload));
        assert!(Condition::gt("Age", "39").matches(&payload));
        assert!(!Condition::gt("Age", "40").matches(&payload));
        assert!(Condition::le("Age", "40").matches(&payload));
        assert!(Condition::lt("Age", "40.5").matches(&payload));
        assert!(!Condition::lt("Age", "40").matches(&payload));
    }

    #[test]
    fn test_filter_range_is_numeric_not_lexicographic() {
        // "9" > "10" lexicographically, but 9 < 10 numerically
        let payload = json!({"Age": 9});

        assert!(Condition::lt("Age", "10").matches(&payload));
        assert!(!Condition::gt("Age", "10").matches(&payload));
    }

    #[test]
    fn test_filter_range_numeric_text_field() {
        // Numbers stored as text still compare numerically
        let payload = json!({"Age": "9"});

        assert!(Condition::lt("Age", "10").matches(&payload));
    }

    #[test]
    fn test_filter_range_falls_back_to_lexicographic() {
        let payload = json!({"Name": "Bob"});

        assert!(Condition::gt("Name", "Alice").matches(&payload));
        assert!(Condition::lt("Name", "Carol").matches(&payload));
        // Mixed: one side is not a number
        assert!(Condition::gt("Name", "100").matches(&payload));
    }

    #[test]
    fn test_filter_range_nan_never_matches() {
        let payload = json!({"Value": "NaN"});

        assert!(!Condition::lt("Value", "1").matches(&payload));
        assert!(!Condition::ge("Value", "1").matches(&payload));
    }

    #[test]
    fn test_filter_range_boundaries_from_text() {
        let payload = json!({"Age": 25});

        for (text, expected) in [
            ("Age < 25", false),
            ("Age <= 25", true),
            ("Age > 25", false),
            ("Age >= 25", true),
            ("Age = 25", true),
            ("Age != 25", false),
            ("Age <> 24", true),
        ] {
            let filter = Filter::parse(text).unwrap();
            assert_eq!(filter.matches(&payload), expected, "{text}");
        }
    }

    // =========================================================================
    // LIKE / ILIKE
    // =========================================================================

    #[test]
    fn test_filter_like_on_field() {
        let payload = json!({"Email": "alice@example.com"});

        assert!(Condition::like("Email", "%example.com").matches(&payload));
        assert!(!Condition::like("Email", "%EXAMPLE.com").matches(&payload));
        assert!(Condition::ilike("Email", "%EXAMPLE.com").matches(&payload));
    }

    #[test]
    fn test_filter_like_on_number_field_uses_text() {
        let payload = json!({"Zip": 69001});

        assert!(Condition::like("Zip", "69%").matches(&payload));
    }

    // =========================================================================
    // Missing fields
    // =========================================================================

    #[test]
    fn test_filter_missing_field_is_false_for_every_leaf() {
        // Arrange
        let payload = json!({"Name": "Alice"});
        let conditions = [
            Condition::eq("Salary", "1"),
            Condition::ne("Salary", "1"),
            Condition::gt("Salary", "1"),
            Condition::like("Salary", "%"),
            Condition::ilike("Salary", "%"),
            Condition::array_contains("Salary", "1"),
            Condition::array_not_contains("Salary", "1"),
            Condition::array_contains_any("Salary", ["1"]),
            Condition::array_not_contains_any("Salary", ["1"]),
        ];

        // Act & Assert
        for condition in &conditions {
            assert!(!condition.matches(&payload), "{condition:?}");
        }
    }

    #[test]
    fn test_filter_null_field_is_missing() {
        let payload = json!({"Manager": null});

        assert!(!Condition::eq("Manager", "null").matches(&payload));
        assert!(!Condition::ne("Manager", "x").matches(&payload));
    }

    #[test]
    fn test_filter_missing_field_under_not_equal_inside_or() {
        // The missing side is false, the other side decides
        let filter = Filter::parse("Salary != 1 OR Name = 'Alice'").unwrap();

        assert!(filter.matches(&json!({"Name": "Alice"})));
        assert!(!filter.matches(&json!({"Name": "Bob"})));
    }

    // =========================================================================
    // Boolean structure
    // =========================================================================

    #[test]
    fn test_filter_and_or() {
        // Arrange
        let filter = Filter::new(Condition::or(
            Condition::and(Condition::eq("a", "1"), Condition::eq("b", "2")),
            Condition::eq("c", "3"),
        ));

        // Act & Assert
        assert!(filter.matches(&json!({"a": 1, "b": 2, "c": 0})));
        assert!(filter.matches(&json!({"a": 0, "b": 0, "c": 3})));
        assert!(!filter.matches(&json!({"a": 1, "b": 0, "c": 0})));
    }

    #[test]
    fn test_filter_precedence_from_text() {
        // a OR (b AND c)
        let filter = Filter::parse("a = 1 OR b = 1 AND c = 1").unwrap();

        assert!(filter.matches(&json!({"a": 1, "b": 0, "c": 0})));
        assert!(!filter.matches(&json!({"a": 0, "b": 1, "c": 0})));

        // (a OR b) AND c
        let filter = Filter::parse("(a = 1 OR b = 1) AND c = 1").unwrap();

        assert!(!filter.matches(&json!({"a": 1, "b": 0, "c": 0})));
        assert!(filter.matches(&json!({"a": 0, "b": 1, "c": 1})));
    }

    #[test]
    fn test_filter_leaf_count() {
        let filter = Filter::parse("a = 1 AND (b = 2 OR c LIKE 'x%')").unwrap();
        assert_eq!(filter.condition().leaf_count(), 3);
        assert_eq!(Condition::AlwaysTrue.leaf_count(), 1);
    }

    // =========================================================================
    // Empty filter and constant comparisons
    // =========================================================================

    #[test]
    fn test_filter_empty_text_matches_everything() {
        for text in ["", "   ", "\n\t"] {
            let filter = Filter::parse(text).unwrap();
            assert_eq!(filter.condition, Condition::AlwaysTrue);
            assert!(filter.matches(&json!({})));
        }
        assert_eq!(Filter::default().condition, Condition::AlwaysTrue);
    }

    #[test]
    fn test_filter_true_false_field_is_always_true() {
        for text in ["true = true", "TRUE = 'x'", "false = 1", "False != 0"] {
            let filter = Filter::parse(text).unwrap();
            assert_eq!(filter.condition, Condition::AlwaysTrue, "{text}");
        }
    }

    #[test]
    fn test_filter_quoted_left_operand_never_matches() {
        for text in ["'Alice' = Name", "'true' = true", "'x' != 'y'", "'a' LIKE '%'"] {
            let filter = Filter::parse(text).unwrap();
            assert_eq!(filter.condition, Condition::AlwaysFalse, "{text}");
            assert!(!filter.matches(&json!({"Name": "Alice", "Alice": "Name"})), "{text}");
        }
        assert_eq!(Condition::AlwaysFalse.leaf_count(), 1);
    }

    #[test]
    fn test_filter_quoted_left_operand_inside_or() {
        let filter = Filter::parse("'Alice' = Name OR Name = 'Alice'").unwrap();
        assert!(filter.matches(&json!({"Name": "Alice"})));
    }

    #[test]
    fn test_evaluate_none_matches_everything() {
        let payload = json!({"a": 1});

        assert!(evaluate(None, &payload));
        assert!(evaluate(Some(&Condition::eq("a", "1")), &payload));
        assert!(!evaluate(Some(&Condition::eq("a", "2")), &payload));
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    #[test]
    fn test_compile_operator_mapping() {
        let cases = [
            (CompareOp::Eq, Condition::eq("f", "v")),
            (CompareOp::Ne, Condition::ne("f", "v")),
            (CompareOp::Lt, Condition::lt("f", "v")),
            (CompareOp::Le, Condition::le("f", "v")),
            (CompareOp::Gt, Condition::gt("f", "v")),
            (CompareOp::Ge, Condition::ge("f", "v")),
            (CompareOp::Like, Condition::like("f", "v")),
            (CompareOp::ILike, Condition::ilike("f", "v")),
        ];

        for (op, expected) in cases {
            let cmp = Comparison::new("f", op, Literal::Quoted("v".to_string()));
            assert_eq!(Condition::from(cmp), expected, "{op:?}");
        }
    }

    #[test]
    fn test_compile_bare_and_quoted_literals_compare_the_same() {
        let bare = compile(Parser::parse("Age = 25").unwrap());
        let quoted = compile(Parser::parse("Age = '25'").unwrap());

        assert_eq!(bare, quoted);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let text = "ANY(Tags) = ANY('a', 'b') AND (Age > 3 OR Name ILIKE 'x%')";

        let first = Filter::parse(text).unwrap();
        let second = Filter::parse(text).unwrap();

        assert_eq!(first, second);
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn test_condition_serialization_shape() {
        // Arrange
        let condition = Condition::and(Condition::eq("a", "1"), Condition::ilike("b", "x%"));

        // Act
        let value = serde_json::to_value(&condition).expect("serialize");
        let back: Condition = serde_json::from_value(value.clone()).expect("deserialize");

        // Assert
        assert_eq!(value["type"], "and");
        assert_eq!(value["left"]["type"], "equal");
        assert_eq!(value["right"]["case_insensitive"], true);
        assert_eq!(back, condition);
    }

    #[test]
    fn test_condition_deserialize_like_defaults_case_sensitive() {
        let condition: Condition =
            serde_json::from_value(json!({"type": "like", "field": "n", "pattern": "a%"}))
                .expect("deserialize");

        assert_eq!(condition, Condition::like("n", "a%"));
    }

    // =========================================================================
    // apply
    // =========================================================================

    #[test]
    fn test_filter_apply_keeps_order_and_counts() {
        // Arrange
        let items: Vec<_> = (1..=6).map(|i| json!({"id": i, "even": i % 2 == 0})).collect();
        let filter = Filter::parse("even = true").unwrap();

        // Act
        let result = filter.apply(items, &FilterOptions::new(2, 1));

        // Assert
        assert_eq!(result.count, 3);
        let ids: Vec<_> = result.items.iter().map(|v| v["id"].clone()).collect();
        assert_eq!(ids, vec![json!(4), json!(6)]);
    }

    #[test]
    fn test_filter_apply_on_borrowed_items() {
        let items = vec![json!({"n": 1}), json!({"n": 2})];
        let filter = Filter::parse("n > 1").unwrap();

        let result = filter.apply(&items, &FilterOptions::default());

        assert_eq!(result.count, 1);
        assert_eq!(result.items[0]["n"], 2);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_filter_is_shareable_across_threads() {
        let filter = std::sync::Arc::new(Filter::parse("n >= 50").unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let filter = std::sync::Arc::clone(&filter);
                std::thread::spawn(move || {
                    let items: Vec<_> = (0..100).map(|n| json!({"n": n, "t": t})).collect();
                    filter.apply(items, &FilterOptions::default()).count
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 50);
        }
    }
}
