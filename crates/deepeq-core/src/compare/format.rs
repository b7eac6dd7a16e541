//! Human-readable failure descriptions for comparison results.

use crate::compare::model::{DivergenceInfo, EqualityResult};
use crate::value::Value;

/// Render a comparison result plus an optional user message.
///
/// Walks the chain from the head to the failing tail, one line per narrowing
/// step, then prints the expected and actual values found at the tail.
/// Values are stringified through their [`Display`](std::fmt::Display)
/// implementation, which defers to a custom value's own string conversion
/// when it has one.
pub fn format_result(result: &EqualityResult, message: Option<&str>) -> String {
    let mut out = String::new();

    if let Some(message) = message.filter(|m| !m.is_empty()) {
        out.push_str(message);
        out.push('\n');
    }

    if result.is_success {
        out.push_str("Values are equal");
        return out;
    }

    out.push_str("Values are not equal");
    for node in result.comparison_node.iter() {
        if let Some(info) = &node.info {
            out.push_str("\n  ");
            out.push_str(&describe_step(info));
        }
    }

    let leaf = result.comparison_node.leaf();
    out.push_str(&format!("\n  expected: {}", leaf.expected));
    out.push_str(&format!("\n  actual:   {}", leaf.actual));
    out
}

/// One-line description of a single divergence step.
pub fn describe_step(info: &DivergenceInfo) -> String {
    match info {
        DivergenceInfo::Type {
            expected_type,
            actual_type,
        } => format!("type mismatch: expected {expected_type}, actual {actual_type}"),
        DivergenceInfo::CollectionSize {
            expected_size,
            actual_size,
        } => format!("size mismatch: expected {expected_size}, actual {actual_size}"),
        DivergenceInfo::ArrayIndex { index } => format!("at index {index}"),
        DivergenceInfo::MapValue { key, .. } => format!("at key {key}"),
        DivergenceInfo::Set {
            missing_expected,
            missing_actual,
            is_map_keys,
        } => {
            let label = if *is_map_keys {
                "map keys differ"
            } else {
                "set missing members"
            };
            format!(
                "{label}: expected is missing [{}], actual is missing [{}]",
                join(missing_expected),
                join(missing_actual)
            )
        }
        DivergenceInfo::Primitive => "values differ".to_string(),
    }
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
