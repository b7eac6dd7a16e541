//! JSON fixture encoding for runtime values.
//!
//! Plain JSON maps onto values directly: `null`, booleans, numbers, strings,
//! arrays and objects. Values JSON cannot express use single-key tagged
//! objects:
//!
//! | Value | Fixture form |
//! |-------|--------------|
//! | undefined | `{"$undefined": true}` |
//! | NaN / ±Infinity | `{"$number": "NaN"}`, `{"$number": "Infinity"}`, `{"$number": "-Infinity"}` |
//! | set | `{"$set": [1, 2]}` |
//! | map | `{"$map": [["a", 1], [[1, 2], "array key"]]}` |
//!
//! A single-key object whose key is one of these tags is always read as the
//! tagged value.

use crate::errors::{DeepEqError, Result};
use crate::value::Value;
use serde_json::{Map as JsonMap, Number, Value as Json};

const TAG_UNDEFINED: &str = "$undefined";
const TAG_NUMBER: &str = "$number";
const TAG_SET: &str = "$set";
const TAG_MAP: &str = "$map";

/// Decode fixture bytes into a value.
///
/// # Errors
///
/// - `InvalidJson`: bytes are not valid UTF-8 or not valid JSON
/// - `InvalidFixture`: a tagged value is malformed
pub fn parse_fixture(bytes: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(bytes).map_err(|e| DeepEqError::InvalidJson {
        reason: format!("fixture is not valid UTF-8: {}", e),
    })?;
    let json: Json = serde_json::from_str(text)?;
    from_json(&json)
}

/// Decode a parsed JSON document into a value.
///
/// # Errors
///
/// - `InvalidFixture`: a tagged value is malformed; `path` points at it
pub fn from_json(json: &Json) -> Result<Value> {
    decode(json, "$")
}

fn invalid(path: &str, reason: impl Into<String>) -> DeepEqError {
    DeepEqError::InvalidFixture {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn decode(json: &Json, path: &str) -> Result<Value> {
    match json {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => n
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| invalid(path, format!("number {} is not representable", n))),
        Json::String(s) => Ok(Value::string(s.as_str())),
        Json::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| decode(item, &format!("{path}[{i}]")))
            .collect::<Result<Vec<_>>>()
            .map(Value::from),
        Json::Object(obj) => match single_tag(obj) {
            Some((tag, body)) => decode_tagged(tag, body, &format!("{path}.{tag}")),
            None => obj
                .iter()
                .map(|(k, v)| -> Result<(String, Value)> {
                    Ok((k.clone(), decode(v, &format!("{path}.{k}"))?))
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::object),
        },
    }
}

fn single_tag(obj: &JsonMap<String, Json>) -> Option<(&str, &Json)> {
    if obj.len() != 1 {
        return None;
    }
    let (key, body) = obj.iter().next()?;
    [TAG_UNDEFINED, TAG_NUMBER, TAG_SET, TAG_MAP]
        .contains(&key.as_str())
        .then_some((key.as_str(), body))
}

fn decode_tagged(tag: &str, body: &Json, path: &str) -> Result<Value> {
    match tag {
        TAG_UNDEFINED => match body {
            Json::Bool(true) => Ok(Value::Undefined),
            _ => Err(invalid(path, "`$undefined` must be `true`")),
        },
        TAG_NUMBER => match body {
            Json::String(s) => match s.as_str() {
                "NaN" => Ok(Value::Number(f64::NAN)),
                "Infinity" => Ok(Value::Number(f64::INFINITY)),
                "-Infinity" => Ok(Value::Number(f64::NEG_INFINITY)),
                other => Err(invalid(path, format!("unknown special number `{}`", other))),
            },
            Json::Number(_) => decode(body, path),
            _ => Err(invalid(path, "`$number` must be a string or a number")),
        },
        TAG_SET => match body {
            Json::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| decode(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>>>()
                .map(Value::set),
            _ => Err(invalid(path, "`$set` must be an array")),
        },
        TAG_MAP => match body {
            Json::Array(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, entry)| decode_entry(entry, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>>>()
                .map(Value::map),
            _ => Err(invalid(path, "`$map` must be an array of [key, value] pairs")),
        },
        other => Err(invalid(path, format!("unknown tag `{}`", other))),
    }
}

fn decode_entry(entry: &Json, path: &str) -> Result<(Value, Value)> {
    match entry.as_array().map(Vec::as_slice) {
        Some([key, value]) => Ok((
            decode(key, &format!("{path}[0]"))?,
            decode(value, &format!("{path}[1]"))?,
        )),
        _ => Err(invalid(path, "map entry must be a two-element [key, value] array")),
    }
}

/// Encode a value in fixture form.
///
/// Integral numbers encode as JSON integers. Custom values encode as their
/// string form since their host type cannot be reconstructed.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Undefined => tagged(TAG_UNDEFINED, Json::Bool(true)),
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => encode_number(*n),
        Value::String(s) => Json::String(s.to_string()),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Set(members) => tagged(TAG_SET, Json::Array(members.iter().map(to_json).collect())),
        Value::Map(entries) => tagged(
            TAG_MAP,
            Json::Array(
                entries
                    .iter()
                    .map(|(k, v)| Json::Array(vec![to_json(k), to_json(v)]))
                    .collect(),
            ),
        ),
        Value::Object(props) => Json::Object(
            props
                .iter()
                .map(|(k, v)| (k.clone(), to_json(v)))
                .collect(),
        ),
        Value::Custom(_) => Json::String(value.to_string()),
    }
}

fn tagged(tag: &str, body: Json) -> Json {
    let mut obj = JsonMap::new();
    obj.insert(tag.to_string(), body);
    Json::Object(obj)
}

fn encode_number(n: f64) -> Json {
    if n.is_nan() {
        return tagged(TAG_NUMBER, Json::String("NaN".to_string()));
    }
    if n.is_infinite() {
        let label = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return tagged(TAG_NUMBER, Json::String(label.to_string()));
    }
    // Integral values within the exactly representable range stay integers.
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Json::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, StructuralKind};
    use serde_json::json;

    #[test]
    fn test_plain_json_maps_directly() {
        let v = from_json(&json!({"a": [1, "x", null, true]})).unwrap();
        assert_eq!(classify(&v), StructuralKind::Object);
        assert_eq!(
            v,
            Value::object([(
                "a",
                Value::array([Value::from(1), Value::from("x"), Value::Null, Value::from(true)])
            )])
        );
    }

    #[test]
    fn test_tagged_values() {
        assert!(matches!(
            from_json(&json!({"$undefined": true})).unwrap(),
            Value::Undefined
        ));
        assert!(from_json(&json!({"$number": "NaN"})).unwrap().is_nan());
        assert_eq!(
            from_json(&json!({"$set": [1, 2, 1]})).unwrap().len(),
            Some(2)
        );
        let map = from_json(&json!({"$map": [[[1], "k"], ["a", 2]]})).unwrap();
        assert_eq!(classify(&map), StructuralKind::Map);
        assert_eq!(map.len(), Some(2));
    }

    #[test]
    fn test_multi_key_object_with_tag_name_is_plain() {
        let v = from_json(&json!({"$set": [1], "other": 2})).unwrap();
        assert_eq!(classify(&v), StructuralKind::Object);
    }

    #[test]
    fn test_malformed_tag_reports_path() {
        let err = from_json(&json!({"items": [0, {"$set": 5}]})).unwrap_err();
        match err {
            DeepEqError::InvalidFixture { path, .. } => assert_eq!(path, "$.items[1].$set"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_bad_map_entry_is_rejected() {
        let err = from_json(&json!({"$map": [["only-key"]]})).unwrap_err();
        assert!(matches!(err, DeepEqError::InvalidFixture { .. }));
    }

    #[test]
    fn test_invalid_bytes() {
        assert!(matches!(
            parse_fixture(b"{not json"),
            Err(DeepEqError::InvalidJson { .. })
        ));
        assert!(matches!(
            parse_fixture(&[0xff, 0xfe]),
            Err(DeepEqError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_encode_special_values() {
        assert_eq!(to_json(&Value::Undefined), json!({"$undefined": true}));
        assert_eq!(to_json(&Value::from(f64::NAN)), json!({"$number": "NaN"}));
        assert_eq!(to_json(&Value::from(3)), json!(3));
        assert_eq!(to_json(&Value::from(2.5)), json!(2.5));
        assert_eq!(
            to_json(&Value::set([Value::from("a")])),
            json!({"$set": ["a"]})
        );
    }

    #[test]
    fn test_decode_of_encoded_nested_value_is_equal() {
        let v = Value::map([(
            Value::set([Value::from(1)]),
            Value::object([("n", Value::from(f64::INFINITY))]),
        )]);
        assert_eq!(from_json(&to_json(&v)).unwrap(), v);
    }
}
