//! Shared helpers for deepeq-core integration tests

use deepeq_core::{CustomValue, Equatable, Stringable, Value};
use proptest::prelude::*;
use std::any::Any;

/// Array of integer numbers
#[allow(dead_code)]
pub fn nums(ns: &[i32]) -> Value {
    Value::array(ns.iter().map(|n| Value::from(*n)))
}

/// Set of integer numbers
#[allow(dead_code)]
pub fn num_set(ns: &[i32]) -> Value {
    Value::set(ns.iter().map(|n| Value::from(*n)))
}

/// Amount in cents with its own equality and string contracts
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub cents: i64,
}

impl Equatable for Money {
    fn equals(&self, other: &Value) -> bool {
        other.downcast_ref::<Money>() == Some(self)
    }
}

impl Stringable for Money {
    fn to_display_string(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let cents = self.cents.abs();
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }
}

impl CustomValue for Money {
    fn type_name(&self) -> &str {
        "Money"
    }

    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }

    fn as_stringable(&self) -> Option<&dyn Stringable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[allow(dead_code)]
pub fn money(cents: i64) -> Value {
    Value::custom(Money { cents })
}

/// Tolerance matcher: equal to any `Approx` within its own `tol`
///
/// Equality is one-sided, so it tells which side's contract decided.
#[derive(Debug, Clone, PartialEq)]
pub struct Approx {
    pub v: i64,
    pub tol: i64,
}

impl Equatable for Approx {
    fn equals(&self, other: &Value) -> bool {
        other
            .downcast_ref::<Approx>()
            .is_some_and(|o| (o.v - self.v).abs() <= self.tol)
    }
}

impl CustomValue for Approx {
    fn type_name(&self) -> &str {
        "Approx"
    }

    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[allow(dead_code)]
pub fn approx(v: i64, tol: i64) -> Value {
    Value::custom(Approx { v, tol })
}

/// Plain host record with no capabilities; compared over its properties
#[derive(Debug, Clone)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl CustomValue for Point {
    fn type_name(&self) -> &str {
        "Point"
    }

    fn properties(&self) -> Vec<(String, Value)> {
        vec![
            ("x".to_string(), Value::from(self.x)),
            ("y".to_string(), Value::from(self.y)),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[allow(dead_code)]
pub fn point(x: i32, y: i32) -> Value {
    Value::custom(Point { x, y })
}

/// Arbitrary values up to a few levels deep, including NaN and signed zero
#[allow(dead_code)]
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i32..1000).prop_map(Value::from),
        Just(Value::from(f64::NAN)),
        Just(Value::from(-0.0)),
        "[a-z]{0,6}".prop_map(Value::from),
        (-500i64..500).prop_map(money),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
            prop::collection::vec((inner.clone(), inner.clone()), 0..4).prop_map(Value::map),
            prop::collection::vec(("[a-c]{1,2}", inner), 0..4).prop_map(Value::object),
        ]
    })
}
