//! Recursive structural equality engine.
//!
//! The core entry point is [`compare`], which walks `expected` and `actual`
//! in parallel and returns an [`EqualityResult`]. The walk is depth-first,
//! single pass and stops at the first divergence on every level, so a
//! failing chain is a single path from the root to the offending leaf.
//!
//! Assertion counting: one unit per atomic comparison. A primitive check,
//! a collection size check and a set membership pass each count one; a map
//! key-set check counts one. Type mismatches and size mismatches stop the
//! step after one unit.

use crate::classify::{classify, type_name, StructuralKind};
use crate::compare::model::{ComparisonNode, DivergenceInfo, EqualityResult};
use crate::value::Value;

/// Compare two values for deep structural equality.
///
/// Never fails: a mismatch is a normal result with `is_success == false` and
/// a populated divergence chain.
pub fn compare(expected: &Value, actual: &Value) -> EqualityResult {
    let result = EqualityResult::from_chain(compare_node(expected, actual));

    tracing::debug!(
        is_success = result.is_success,
        assertion_count = result.assertion_count,
        chain_depth = result.comparison_node.depth(),
        divergence_kind = result.divergence().map(|d| d.kind().as_str()),
        "compare finished"
    );

    result
}

/// Boolean deep equality, the relation used for set and key membership.
pub fn deep_equals(expected: &Value, actual: &Value) -> bool {
    compare_node(expected, actual).is_equal()
}

/// SameValueZero for primitives.
///
/// NaN equals NaN, `+0` equals `-0`, `undefined` and `null` each equal only
/// themselves. A custom value on the expected side with its own equality
/// contract decides for itself.
pub fn primitive_equals(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Custom(c), _) => match c.as_equatable() {
            Some(eq) => eq.equals(actual),
            None => false,
        },
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

fn compare_node(expected: &Value, actual: &Value) -> ComparisonNode {
    let kind = classify(expected);
    if kind != classify(actual) {
        return type_mismatch(expected, actual);
    }

    // Kinds are assigned per variant, so the payload patterns below always
    // match; a miss would be a classifier bug and reports as a type mismatch.
    match kind {
        StructuralKind::Primitive => compare_primitives(expected, actual),
        StructuralKind::Array => match (expected, actual) {
            (Value::Array(e), Value::Array(a)) => compare_arrays(expected, actual, e, a),
            _ => type_mismatch(expected, actual),
        },
        StructuralKind::Set => match (expected, actual) {
            (Value::Set(e), Value::Set(a)) => compare_sets(expected, actual, e, a),
            _ => type_mismatch(expected, actual),
        },
        StructuralKind::Map | StructuralKind::Object => {
            match (expected.entries(), actual.entries()) {
                (Some(e), Some(a)) => compare_entries(expected, actual, &e, &a),
                _ => type_mismatch(expected, actual),
            }
        }
    }
}

fn type_mismatch(expected: &Value, actual: &Value) -> ComparisonNode {
    ComparisonNode::diverged(
        expected,
        actual,
        1,
        DivergenceInfo::Type {
            expected_type: type_name(expected),
            actual_type: type_name(actual),
        },
    )
}

fn size_mismatch(expected: &Value, actual: &Value, e: usize, a: usize) -> ComparisonNode {
    ComparisonNode::diverged(
        expected,
        actual,
        1,
        DivergenceInfo::CollectionSize {
            expected_size: e,
            actual_size: a,
        },
    )
}

fn compare_primitives(expected: &Value, actual: &Value) -> ComparisonNode {
    if type_name(expected) != type_name(actual) {
        return type_mismatch(expected, actual);
    }
    if primitive_equals(expected, actual) {
        ComparisonNode::equal(expected, actual, 1)
    } else {
        ComparisonNode::diverged(expected, actual, 1, DivergenceInfo::Primitive)
    }
}

fn compare_arrays(expected: &Value, actual: &Value, e: &[Value], a: &[Value]) -> ComparisonNode {
    if e.len() != a.len() {
        return size_mismatch(expected, actual, e.len(), a.len());
    }

    // One for the size check, plus everything the equal elements consumed.
    let mut count = 1;
    for (index, (ev, av)) in e.iter().zip(a).enumerate() {
        let child = compare_node(ev, av);
        if !child.is_equal() {
            return ComparisonNode::wrapping(
                expected,
                actual,
                count,
                DivergenceInfo::ArrayIndex { index },
                child,
            );
        }
        count += child.total_assertions();
    }

    ComparisonNode::equal(expected, actual, count)
}

/// Expected-side members that no actual-side member matches.
///
/// Both helpers keep the expected member on the left of `deep_equals`, so an
/// expected value's own equality contract decides membership either way.
fn unmatched_expected<'a, I, J>(expected: I, actual: J) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value>,
    J: IntoIterator<Item = &'a Value> + Clone,
{
    expected
        .into_iter()
        .filter(|e| !actual.clone().into_iter().any(|a| deep_equals(e, a)))
        .cloned()
        .collect()
}

/// Actual-side members that no expected-side member matches.
fn unmatched_actual<'a, I, J>(expected: I, actual: J) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value> + Clone,
    J: IntoIterator<Item = &'a Value>,
{
    actual
        .into_iter()
        .filter(|a| !expected.clone().into_iter().any(|e| deep_equals(e, a)))
        .cloned()
        .collect()
}

fn compare_sets(expected: &Value, actual: &Value, e: &[Value], a: &[Value]) -> ComparisonNode {
    if e.len() != a.len() {
        return size_mismatch(expected, actual, e.len(), a.len());
    }

    let missing_expected = unmatched_actual(e, a);
    let missing_actual = unmatched_expected(e, a);
    if missing_expected.is_empty() && missing_actual.is_empty() {
        return ComparisonNode::equal(expected, actual, 2);
    }

    ComparisonNode::diverged(
        expected,
        actual,
        2,
        DivergenceInfo::Set {
            missing_expected,
            missing_actual,
            is_map_keys: false,
        },
    )
}

fn compare_entries(
    expected: &Value,
    actual: &Value,
    e: &[(Value, Value)],
    a: &[(Value, Value)],
) -> ComparisonNode {
    if e.len() != a.len() {
        return size_mismatch(expected, actual, e.len(), a.len());
    }

    let mut pairs = Vec::with_capacity(e.len());
    let mut missing_actual = Vec::new();
    for (key, ev) in e {
        match a.iter().find(|(k, _)| deep_equals(key, k)) {
            Some((_, av)) => pairs.push((key, ev, av)),
            None => missing_actual.push(key.clone()),
        }
    }
    let missing_expected =
        unmatched_actual(e.iter().map(|(k, _)| k), a.iter().map(|(k, _)| k));
    if !missing_expected.is_empty() || !missing_actual.is_empty() {
        return ComparisonNode::diverged(
            expected,
            actual,
            1,
            DivergenceInfo::Set {
                missing_expected,
                missing_actual,
                is_map_keys: true,
            },
        );
    }

    let mut count = 1;
    for (key, ev, av) in pairs {
        let child = compare_node(ev, av);
        if !child.is_equal() {
            return ComparisonNode::wrapping(
                expected,
                actual,
                count,
                DivergenceInfo::MapValue {
                    key: key.clone(),
                    expected_value: ev.clone(),
                    actual_value: av.clone(),
                },
                child,
            );
        }
        count += child.total_assertions();
    }

    ComparisonNode::equal(expected, actual, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nums(ns: &[i32]) -> Value {
        Value::array(ns.iter().map(|n| Value::from(*n)))
    }

    #[test]
    fn test_equal_primitives() {
        let r = compare(&Value::from(1), &Value::from(1));
        assert!(r.is_success);
        assert_eq!(r.assertion_count, 1);
        assert_eq!(r.comparison_node.depth(), 1);
    }

    #[test]
    fn test_primitive_mismatch_carries_info() {
        let r = compare(&Value::from("a"), &Value::from("b"));
        assert!(!r.is_success);
        assert_eq!(r.divergence(), Some(&DivergenceInfo::Primitive));
        assert_eq!(r.assertion_count, 1);
    }

    #[test]
    fn test_nan_equals_nan() {
        assert!(compare(&Value::from(f64::NAN), &Value::from(f64::NAN)).is_success);
        assert!(!compare(&Value::from(f64::NAN), &Value::from(0)).is_success);
    }

    #[test]
    fn test_signed_zeroes_equal() {
        assert!(compare(&Value::from(0.0), &Value::from(-0.0)).is_success);
    }

    #[test]
    fn test_null_and_undefined_are_distinct_types() {
        let r = compare(&Value::Null, &Value::Undefined);
        assert_eq!(
            r.divergence(),
            Some(&DivergenceInfo::Type {
                expected_type: "null".to_string(),
                actual_type: "undefined".to_string(),
            })
        );
    }

    #[test]
    fn test_array_counts_size_plus_elements() {
        let r = compare(&nums(&[1, 2, 3, 4]), &nums(&[1, 2, 3, 4]));
        assert!(r.is_success);
        assert_eq!(r.assertion_count, 5);
    }

    #[test]
    fn test_empty_containers_count_one() {
        assert_eq!(compare(&nums(&[]), &nums(&[])).assertion_count, 1);
        assert_eq!(
            compare(&Value::map([]), &Value::map([])).assertion_count,
            1
        );
    }

    #[test]
    fn test_array_index_wraps_failing_child() {
        let r = compare(&nums(&[1, 2, 3]), &nums(&[1, 9, 3]));
        let head = &r.comparison_node;
        assert_eq!(head.info, Some(DivergenceInfo::ArrayIndex { index: 1 }));
        assert_eq!(head.assertion_count, 2);
        let leaf = head.next.as_deref().unwrap();
        assert_eq!(leaf.info, Some(DivergenceInfo::Primitive));
        assert_eq!(leaf.expected, Value::from(2));
        assert_eq!(leaf.actual, Value::from(9));
        assert_eq!(r.assertion_count, 3);
    }

    #[test]
    fn test_set_counts_size_and_membership() {
        let a = Value::set([Value::from(1), Value::from(2)]);
        let b = Value::set([Value::from(2), Value::from(1)]);
        let r = compare(&a, &b);
        assert!(r.is_success);
        assert_eq!(r.assertion_count, 2);
    }

    #[test]
    fn test_set_with_nested_members() {
        let a = Value::set([Value::array([Value::from(1)]), Value::array([Value::from(2)])]);
        let b = Value::set([Value::array([Value::from(2)]), Value::array([Value::from(1)])]);
        assert!(compare(&a, &b).is_success);
    }

    #[test]
    fn test_map_keys_of_any_type() {
        let a = Value::map([(Value::array([Value::from(1)]), Value::from("x"))]);
        let b = Value::map([(Value::array([Value::from(1)]), Value::from("x"))]);
        let r = compare(&a, &b);
        assert!(r.is_success);
        assert_eq!(r.assertion_count, 2);
    }

    #[test]
    fn test_map_value_mismatch_wraps_child() {
        let a = Value::map([
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
        ]);
        let b = Value::map([
            (Value::from("b"), Value::from(3)),
            (Value::from("a"), Value::from(1)),
        ]);
        let r = compare(&a, &b);
        match &r.comparison_node.info {
            Some(DivergenceInfo::MapValue {
                key,
                expected_value,
                actual_value,
            }) => {
                assert_eq!(*key, Value::from("b"));
                assert_eq!(*expected_value, Value::from(2));
                assert_eq!(*actual_value, Value::from(3));
            }
            other => panic!("expected MapValue, got {other:?}"),
        }
        assert_eq!(r.comparison_node.assertion_count, 2);
        assert_eq!(r.assertion_count, 3);
    }

    #[test]
    fn test_object_folds_into_map_comparison() {
        let a = Value::object([("x", Value::from(1))]);
        let b = Value::object([("x", Value::from(2))]);
        let r = compare(&a, &b);
        assert_eq!(
            r.divergence_path(),
            vec![
                crate::compare::model::DivergenceInfoKind::MapValue,
                crate::compare::model::DivergenceInfoKind::Primitive,
            ]
        );
    }

    #[test]
    fn test_object_and_map_are_different_kinds() {
        let obj = Value::object([("x", Value::from(1))]);
        let map = Value::map([(Value::from("x"), Value::from(1))]);
        let r = compare(&obj, &map);
        assert_eq!(
            r.divergence(),
            Some(&DivergenceInfo::Type {
                expected_type: "Object".to_string(),
                actual_type: "Map".to_string(),
            })
        );
    }

    #[test]
    fn test_deep_equals_matches_compare() {
        let a = nums(&[1, 2]);
        assert!(deep_equals(&a, &nums(&[1, 2])));
        assert!(!deep_equals(&a, &nums(&[2, 1])));
    }
}
