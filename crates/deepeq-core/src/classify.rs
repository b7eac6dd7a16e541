//! Structural classification of runtime values.
//!
//! Every value maps to exactly one [`StructuralKind`]. The engine classifies
//! each side once per comparison step and dispatches on the tag.

use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Broad shape category assigned to a value before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructuralKind {
    Primitive,
    Array,
    Map,
    Object,
    Set,
}

impl StructuralKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructuralKind::Primitive => "Primitive",
            StructuralKind::Array => "Array",
            StructuralKind::Map => "Map",
            StructuralKind::Object => "Object",
            StructuralKind::Set => "Set",
        }
    }
}

impl fmt::Display for StructuralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value.
///
/// Priority: undefined/null/boolean/number/string are primitives; then
/// arrays, sets and maps by variant. A custom value with its own equality
/// contract is atomic and classifies as a primitive; any other custom value
/// is a structured record and classifies as an object.
pub fn classify(value: &Value) -> StructuralKind {
    match value {
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            StructuralKind::Primitive
        }
        Value::Array(_) => StructuralKind::Array,
        Value::Set(_) => StructuralKind::Set,
        Value::Map(_) => StructuralKind::Map,
        Value::Custom(c) if c.as_equatable().is_some() => StructuralKind::Primitive,
        Value::Object(_) | Value::Custom(_) => StructuralKind::Object,
    }
}

/// Finer type name used in type-mismatch reports.
///
/// Primitives report their sub-kind (`undefined`, `null`, `boolean`,
/// `number`, `string`, or the custom type name); containers report their
/// structural kind.
pub fn type_name(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Custom(c) if c.as_equatable().is_some() => c.type_name().to_string(),
        other => classify(other).as_str().to_string(),
    }
}
