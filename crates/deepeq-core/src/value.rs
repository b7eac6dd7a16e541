//! Runtime values compared by the equality engine.
//!
//! Values are immutable and cheap to clone: container payloads and strings
//! sit behind `Arc`, so comparison nodes can own the values they describe
//! without deep copies.
//!
//! | Shape | Variant |
//! |-------|---------|
//! | undefined / null | `Value::Undefined`, `Value::Null` |
//! | boolean | `Value::Bool(bool)` |
//! | number | `Value::Number(f64)` |
//! | string | `Value::String(Arc<str>)` |
//! | ordered sequence | `Value::Array` |
//! | set | `Value::Set` (insertion ordered, de-duplicated) |
//! | key-value map | `Value::Map` (insertion ordered, any key type) |
//! | structured record | `Value::Object` (own enumerable properties) |
//! | host value | `Value::Custom` (see [`CustomValue`]) |

use crate::compare::engine::deep_equals;
use serde::{Serialize, Serializer};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value's own equality contract.
///
/// Implemented by host values that know how to compare themselves. When the
/// expected side of a comparison exposes this capability the engine defers to
/// it instead of comparing structurally.
pub trait Equatable {
    fn equals(&self, other: &Value) -> bool;
}

/// A value's own string conversion contract.
pub trait Stringable {
    fn to_display_string(&self) -> String;
}

/// A host value embedded in a [`Value`] tree.
///
/// Only `type_name` and `as_any` are required. Without the [`Equatable`]
/// capability a custom value is compared like an object over
/// [`properties`](CustomValue::properties); without [`Stringable`] it is
/// rendered as `TypeName {key: value, ...}`.
pub trait CustomValue: fmt::Debug + Send + Sync {
    /// Name used for type-mismatch reporting and generic stringification.
    fn type_name(&self) -> &str;

    /// Own enumerable properties in definition order.
    fn properties(&self) -> Vec<(String, Value)> {
        Vec::new()
    }

    fn as_equatable(&self) -> Option<&dyn Equatable> {
        None
    }

    fn as_stringable(&self) -> Option<&dyn Stringable> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// An arbitrary runtime datum.
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<Vec<Value>>),
    Set(Arc<Vec<Value>>),
    Map(Arc<Vec<(Value, Value)>>),
    Object(Arc<Vec<(String, Value)>>),
    Custom(Arc<dyn CustomValue>),
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Arc::new(items.into_iter().collect()))
    }

    /// Build a set, dropping members deep-equal to one already present.
    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        let mut unique: Vec<Value> = Vec::new();
        for member in members {
            if !unique.iter().any(|m| deep_equals(m, &member)) {
                unique.push(member);
            }
        }
        Value::Set(Arc::new(unique))
    }

    /// Build a map. A repeated key keeps its first position and takes the
    /// last value, like `Map.prototype.set`.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            match out.iter_mut().find(|(k, _)| deep_equals(k, &key)) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Value::Map(Arc::new(out))
    }

    /// Build an object from property name/value pairs. A repeated name keeps
    /// its first position and takes the last value.
    pub fn object<K: Into<String>>(props: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (name, value) in props {
            let name = name.into();
            match out.iter_mut().find(|(k, _)| *k == name) {
                Some(slot) => slot.1 = value,
                None => out.push((name, value)),
            }
        }
        Value::Object(Arc::new(out))
    }

    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Value::Custom(Arc::new(value))
    }

    /// Downcast a custom value to its concrete host type.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Custom(c) => c.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(n) if n.is_nan())
    }

    /// Number of elements, members or entries for containers.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Array(items) | Value::Set(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Object(props) => Some(props.len()),
            _ => None,
        }
    }

    /// Key/value view of a map-like value.
    ///
    /// Objects and non-equatable custom values expose their properties with
    /// string keys so they can be compared with the map algorithm. Returns
    /// `None` for every other shape.
    pub fn entries(&self) -> Option<Vec<(Value, Value)>> {
        match self {
            Value::Map(entries) => Some(entries.to_vec()),
            Value::Object(props) => Some(
                props
                    .iter()
                    .map(|(k, v)| (Value::string(k.as_str()), v.clone()))
                    .collect(),
            ),
            Value::Custom(c) if c.as_equatable().is_none() => Some(
                c.properties()
                    .into_iter()
                    .map(|(k, v)| (Value::String(k.into()), v))
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Deep structural equality, the same relation the engine reports.
    fn eq(&self, other: &Self) -> bool {
        deep_equals(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Render a number the way a script runtime prints it: integral values
/// without a fractional part, `-0` as `0`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{n}")
    }
}

fn write_joined<'a, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = &'a Value>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_props(f: &mut fmt::Formatter<'_>, props: &[(String, Value)]) -> fmt::Result {
    write!(f, "{{")?;
    for (i, (name, value)) in props.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{name}: {value}")?;
    }
    write!(f, "}}")
}

/// Generic stringification. Custom values with the [`Stringable`]
/// capability render through it.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Array(items) => {
                write!(f, "[")?;
                write_joined(f, items.iter())?;
                write!(f, "]")
            }
            Value::Set(members) => {
                write!(f, "Set {{")?;
                write_joined(f, members.iter())?;
                write!(f, "}}")
            }
            Value::Map(entries) => {
                write!(f, "Map {{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} => {v}")?;
                }
                write!(f, "}}")
            }
            Value::Object(props) => write_props(f, props),
            Value::Custom(c) => match c.as_stringable() {
                Some(s) => write!(f, "{}", s.to_display_string()),
                None => {
                    write!(f, "{} ", c.type_name())?;
                    write_props(f, &c.properties())
                }
            },
        }
    }
}

impl Serialize for Value {
    /// Serializes to the tagged JSON fixture form understood by
    /// [`crate::fixture::from_json`].
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::fixture::to_json(self).serialize(serializer)
    }
}
