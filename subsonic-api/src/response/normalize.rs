//! Lenient accessors for Subsonic JSON payloads
//!
//! Servers disagree on how a one-element collection is rendered: some send a
//! one-element array, others send the bare element. Every collection in a
//! payload goes through [`parse_list`] (objects), [`parse_string_list`]
//! (strings) or the [`one_or_many`] serde adapter, which all return an ordered
//! `Vec` regardless of the wire shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::PayloadError;

/// A JSON object as handed to payload extractors
pub type JsonObject = serde_json::Map<String, Value>;

/// Parse the collection stored under `key` in `container`
///
/// * array: each element is passed to `parser`; `Some` results are kept in order
/// * single object: treated as a one-element array
/// * absent or `null`: empty
///
/// # Errors
/// [`PayloadError::InvalidType`] if an array element is not an object or the
/// value is a scalar; any error returned by `parser`.
pub fn parse_list<T, F>(container: &JsonObject, key: &str, mut parser: F) -> Result<Vec<T>, PayloadError>
where
    F: FnMut(&JsonObject) -> Result<Option<T>, PayloadError>,
{
    match container.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => {
            let mut result = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let object = item.as_object().ok_or_else(|| PayloadError::InvalidType {
                    field: format!("{}[{}]", key, index),
                    expected: "object",
                })?;
                if let Some(parsed) = parser(object)? {
                    result.push(parsed);
                }
            }
            Ok(result)
        }
        Some(Value::Object(object)) => Ok(parser(object)?.into_iter().collect()),
        Some(_) => Err(PayloadError::InvalidType {
            field: key.to_string(),
            expected: "array or object",
        }),
    }
}

/// [`parse_list`] with every element deserialized into `T`
pub fn parse_records<T: DeserializeOwned>(container: &JsonObject, key: &str) -> Result<Vec<T>, PayloadError> {
    parse_list(container, key, |object| parse_record(object).map(Some))
}

/// Deserialize a single JSON object into `T`
pub fn parse_record<T: DeserializeOwned>(object: &JsonObject) -> Result<T, PayloadError> {
    Ok(serde_json::from_value(Value::Object(object.clone()))?)
}

/// Parse a string multi-field such as a playlist's `allowedUser`
///
/// The bare form is a plain string rather than an object, so this cannot share
/// [`parse_list`]. Numbers are accepted and rendered as strings.
pub fn parse_string_list(container: &JsonObject, key: &str) -> Result<Vec<String>, PayloadError> {
    match container.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                scalar_to_string(item).ok_or_else(|| PayloadError::InvalidType {
                    field: format!("{}[{}]", key, index),
                    expected: "string",
                })
            })
            .collect(),
        Some(value) => scalar_to_string(value)
            .map(|s| vec![s])
            .ok_or_else(|| PayloadError::InvalidType {
                field: key.to_string(),
                expected: "string or array of strings",
            }),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Optional string field; empty strings count as absent
pub fn string_field(object: &JsonObject, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::String(s) if s.is_empty() => None,
        Value::Bool(b) => Some(b.to_string()),
        other => scalar_to_string(other),
    }
}

/// Optional integer field; numeric strings are accepted
///
/// Floats are truncated toward zero and saturate at the `i64` bounds, which
/// suits counts and durations. Use [`integral_field`] where a fractional value
/// means the field is wrong.
pub fn int_field(object: &JsonObject, key: &str) -> Option<i64> {
    object.get(key).and_then(value_to_int)
}

/// Optional integer field that rejects fractional numbers
///
/// Accepts JSON integers and integer strings only; `40.5` or `"40.5"` is `None`.
pub fn integral_field(object: &JsonObject, key: &str) -> Option<i64> {
    match object.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

fn value_to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

/// Optional boolean field; `"true"`/`"false"` strings are accepted
pub fn bool_field(object: &JsonObject, key: &str) -> Option<bool> {
    object.get(key).and_then(value_to_bool)
}

/// Optional nested object
pub fn object_field<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    object.get(key).and_then(Value::as_object)
}

/// Nested object the payload cannot be built without
pub fn required_object<'a>(object: &'a JsonObject, key: &str) -> Result<&'a JsonObject, PayloadError> {
    match object.get(key) {
        Some(Value::Object(inner)) => Ok(inner),
        None | Some(Value::Null) => Err(PayloadError::MissingField(key.to_string())),
        Some(_) => Err(PayloadError::InvalidType {
            field: key.to_string(),
            expected: "object",
        }),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Serde adapter for list fields nested inside records
///
/// Use with `#[serde(default, deserialize_with = "one_or_many")]`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

/// Serde adapter for identifiers some servers send as numbers
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

/// Optional variant of [`lenient_string`]; empty strings become `None`
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if s.is_empty() => None,
        Some(value) => scalar_to_string(&value),
        None => None,
    })
}

/// Serde adapter for counters and durations
///
/// Accepts integers, floats (truncated) and numeric strings; anything else is
/// treated as absent.
pub fn lenient_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(value_to_int))
}

/// Serde adapter for flags such as `isDir`
///
/// Accepts booleans and `"true"`/`"false"` strings; `null` or anything else
/// is `false`.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_to_bool)
        .unwrap_or(false))
}

/// Serde adapter for gains, peaks and other decimals
///
/// Accepts numbers and numeric strings; anything else is treated as absent.
pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(value_to_f64))
}

/// Serde adapter for an optional nested record
///
/// A nested value that does not deserialize into `T` is treated as absent
/// instead of failing the enclosing record.
pub fn lenient_opt_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| serde_json::from_value(value).ok()))
}
