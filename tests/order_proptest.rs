// model = "claude-opus-4-5"
// created = "2026-08-05"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Property-based tests for the ordering engine.

use chrono::DateTime;
use orderly::Order;
use orderly::Value;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Any value the engine can meet: scalars, dates, and nested containers.
fn arbitrary_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000.0..1000.0f64).prop_map(Value::Number),
        "[a-z]{0,8}".prop_map(Value::Text),
        (0i64..4_000_000).prop_map(|seconds| {
            Value::Date(DateTime::from_timestamp(seconds, 0).expect("timestamp in range"))
        }),
    ];
    return leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..6).prop_map(Value::Map),
        ]
    });
}

/// Directive strings including dots, brackets, and junk.
fn arbitrary_directive() -> impl Strategy<Value = String> {
    return "[a-z0-9._\\[\\]]{0,12}";
}

/// A row shaped like real data: a numeric `a` (sometimes missing) and a
/// textual `b`.
fn arbitrary_row() -> impl Strategy<Value = Value> {
    return (prop::option::of(0i64..20), "[a-zA-Z]{0,5}").prop_map(|(a, b)| {
        let mut fields = std::collections::BTreeMap::new();
        if let Some(a) = a {
            fields.insert("a".to_string(), Value::from(a));
        }
        fields.insert("b".to_string(), Value::from(b));
        return Value::Map(fields);
    });
}

fn count_of(needle: &Value, haystack: &[Value]) -> usize {
    return haystack.iter().filter(|item| *item == needle).count();
}

fn field_number(row: &Value, key: &str) -> Option<f64> {
    match row.get(key) {
        Some(Value::Number(number)) => Some(*number),
        _ => None,
    }
}

// =============================================================================
// Totality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The engine is total: any value, any directive, any flags, no panic.
    #[test]
    fn never_panics(
        value in arbitrary_value(),
        directive in arbitrary_directive(),
        reverse in any::<bool>(),
        fold in any::<bool>(),
    ) {
        let _ = Order::by(&directive)
            .reversed(reverse)
            .case_insensitive(fold)
            .apply(&value);
    }

    /// Multi-key over arbitrary values is just as total.
    #[test]
    fn never_panics_multi_key(
        value in arbitrary_value(),
        directives in prop::collection::vec(arbitrary_directive(), 0..4),
    ) {
        let keys: Vec<&str> = directives.iter().map(String::as_str).collect();
        let _ = Order::by_keys(&keys).apply(&value);
    }

    /// Non-sequence, non-map inputs always come back unchanged.
    #[test]
    fn scalars_come_back_unchanged(
        number in any::<f64>(),
        directive in arbitrary_directive(),
    ) {
        let input = Value::Number(number);
        let output = Order::by(&directive).apply(&input);
        if number.is_nan() {
            prop_assert!(matches!(output, Value::Number(n) if n.is_nan()));
        } else {
            prop_assert_eq!(output, input);
        }
    }
}

// =============================================================================
// Permutation
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Ordering a sequence yields a permutation of it: same length, same
    /// multiset of elements. (The strategies never produce NaN, so counting
    /// by equality is sound.)
    #[test]
    fn output_is_a_permutation(
        items in prop::collection::vec(arbitrary_value(), 0..12),
        directive in arbitrary_directive(),
        reverse in any::<bool>(),
    ) {
        let input = Value::Sequence(items.clone());
        let output = Order::by(&directive).reversed(reverse).apply(&input);
        let sorted = match output {
            Value::Sequence(sorted) => sorted,
            other => return Err(TestCaseError::fail(format!("not a sequence: {:?}", other))),
        };
        prop_assert_eq!(sorted.len(), items.len());
        for item in &items {
            prop_assert_eq!(count_of(item, &sorted), count_of(item, &items));
        }
    }
}

// =============================================================================
// Spec properties over realistic rows
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// A stable sort on an already-sorted input changes nothing.
    #[test]
    fn ordering_is_idempotent(rows in prop::collection::vec(arbitrary_row(), 0..12)) {
        let input = Value::Sequence(rows);
        let once = Order::by("a").apply(&input);
        let twice = Order::by("a").apply(&once);
        prop_assert_eq!(once, twice);
    }

    /// The reverse flag inverts the final order only.
    #[test]
    fn reverse_flag_reverses_the_forward_result(
        rows in prop::collection::vec(arbitrary_row(), 0..12),
        fold in any::<bool>(),
    ) {
        let input = Value::Sequence(rows);
        let forward = Order::by("a").case_insensitive(fold).apply(&input);
        let backward = Order::by("a").case_insensitive(fold).reversed(true).apply(&input);

        let mut expected = match forward {
            Value::Sequence(items) => items,
            other => return Err(TestCaseError::fail(format!("not a sequence: {:?}", other))),
        };
        expected.reverse();
        prop_assert_eq!(backward, Value::Sequence(expected));
    }

    /// Rows with the field sort ahead of rows without it.
    #[test]
    fn missing_fields_gather_at_the_end(rows in prop::collection::vec(arbitrary_row(), 0..12)) {
        let input = Value::Sequence(rows);
        let sorted = match Order::by("a").apply(&input) {
            Value::Sequence(items) => items,
            other => return Err(TestCaseError::fail(format!("not a sequence: {:?}", other))),
        };
        let first_missing = sorted
            .iter()
            .position(|row| field_number(row, "a").is_none())
            .unwrap_or(sorted.len());
        for row in &sorted[first_missing..] {
            prop_assert!(field_number(row, "a").is_none());
        }
    }

    /// Multi-key: the primary key is non-decreasing, and the secondary key
    /// is non-decreasing within each primary group.
    #[test]
    fn multi_key_groups_correctly(
        rows in prop::collection::vec(
            (0i64..5, 0i64..5).prop_map(|(a, b)| {
                let mut fields = std::collections::BTreeMap::new();
                fields.insert("a".to_string(), Value::from(a));
                fields.insert("b".to_string(), Value::from(b));
                Value::Map(fields)
            }),
            0..16,
        ),
    ) {
        let input = Value::Sequence(rows);
        let sorted = match Order::by_keys(&["a", "b"]).apply(&input) {
            Value::Sequence(items) => items,
            other => return Err(TestCaseError::fail(format!("not a sequence: {:?}", other))),
        };
        for pair in sorted.windows(2) {
            let (a0, a1) = (field_number(&pair[0], "a"), field_number(&pair[1], "a"));
            prop_assert!(a0 <= a1);
            if a0 == a1 {
                prop_assert!(field_number(&pair[0], "b") <= field_number(&pair[1], "b"));
            }
        }
    }

    /// Structure sort only touches the location the path names.
    #[test]
    fn structure_sort_preserves_siblings(
        rows in prop::collection::vec(arbitrary_row(), 0..8),
        sibling in arbitrary_value(),
    ) {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert("items".to_string(), Value::Sequence(rows));
        fields.insert("other".to_string(), sibling.clone());
        let input = Value::Map(fields);

        let sorted = match Order::by("items.a").apply(&input) {
            Value::Map(fields) => fields,
            other => return Err(TestCaseError::fail(format!("not a map: {:?}", other))),
        };
        prop_assert_eq!(sorted.get("other"), Some(&sibling));
        prop_assert!(matches!(sorted.get("items"), Some(Value::Sequence(_))));
    }
}
