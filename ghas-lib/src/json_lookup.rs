use crate::error::GhasError;
use crate::result::GhasResult;
use serde_json::Value;

/// Walks `path` through nested JSON objects, returning `None` as soon as a
/// segment is missing or the current node is not an object.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |node, key| node.get(*key))
}

pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// Reads a GitHub `{ "status": "enabled" | "disabled" }` leaf, treating anything
/// other than `"enabled"` (including a missing path) as disabled.
pub fn lookup_enabled(value: &Value, path: &[&str]) -> bool {
    matches!(lookup_str(value, path), Some("enabled"))
}

pub(crate) fn required<'a>(value: &'a Value, path: &[&str]) -> GhasResult<&'a Value> {
    lookup(value, path).ok_or_else(|| GhasError::MissingField(path.join(".")))
}

pub(crate) fn required_str(value: &Value, path: &[&str]) -> GhasResult<String> {
    required(value, path)?
        .as_str()
        .map(String::from)
        .ok_or_else(|| invalid(path, "a string"))
}

/// The key must be present but may hold `null`, which maps to an empty string.
pub(crate) fn required_nullable_str(value: &Value, path: &[&str]) -> GhasResult<String> {
    match required(value, path)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(invalid(path, "a string or null")),
    }
}

pub(crate) fn required_bool(value: &Value, path: &[&str]) -> GhasResult<bool> {
    required(value, path)?
        .as_bool()
        .ok_or_else(|| invalid(path, "a boolean"))
}

fn invalid(path: &[&str], expected: &'static str) -> GhasError {
    GhasError::InvalidField {
        path: path.join("."),
        expected,
    }
}
