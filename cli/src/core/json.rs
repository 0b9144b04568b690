//! Lenient object parsing for `--data`, `--header` and `--query` values.
//!
//! Input is tried as strict JSON first. Anything that is not valid JSON falls
//! back to a relaxed `{key: value, key2: value2}` grammar: no nesting, no
//! escaped commas, one layer of optional braces and value quotes.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::fmt;

pub type Fields = Map<String, Value>;

pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

lazy_static! {
    static ref DIGITS_REGEX: Regex = Regex::new(r"^\d+$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Which relaxed parts are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxedMode {
    /// A part needs a key; a missing value becomes `""`.
    KeyRequired,
    /// A part needs both a key and a non-empty value.
    KeyAndValue,
}

/// Parse strict or relaxed object notation into an ordered mapping.
///
/// Top-level string values made only of ASCII digits become numbers.
pub fn parse_lenient(input: &str) -> Result<Fields, ParseError> {
    if input.trim().is_empty() {
        return Ok(Fields::new());
    }

    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Ok(coerce_numeric(map)),
        Ok(other) => Err(ParseError::new(format!(
            "expected an object, found {}",
            value_kind(&other)
        ))),
        Err(_) => Ok(parse_relaxed(input, RelaxedMode::KeyRequired)),
    }
}

/// The relaxed `{key: value}` grammar on its own.
pub fn parse_relaxed(input: &str, mode: RelaxedMode) -> Fields {
    let mut text = input.trim();
    if text.len() >= 2 && text.starts_with('{') && text.ends_with('}') {
        text = text[1..text.len() - 1].trim();
    }

    let mut fields = Fields::new();
    if text.is_empty() {
        return fields;
    }

    for part in text.split(',') {
        let (key, value) = match part.split_once(':') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (part.trim(), ""),
        };
        if key.is_empty() {
            continue;
        }
        if value.is_empty() && mode == RelaxedMode::KeyAndValue {
            continue;
        }
        fields.insert(key.to_string(), coerce_str(strip_quotes(value)));
    }

    fields
}

/// Turn every top-level all-digit string into a number.
pub fn coerce_numeric(fields: Fields) -> Fields {
    fields
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => (key, coerce_str(&s)),
            other => (key, other),
        })
        .collect()
}

/// Render a scalar the way it appears in a header or form field.
pub fn value_to_plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerce_str(s: &str) -> Value {
    if DIGITS_REGEX.is_match(s) {
        if let Ok(n) = s.parse::<u64>() {
            return Value::Number(n.into());
        }
        if let Some(n) = s.parse::<f64>().ok().and_then(Number::from_f64) {
            return Value::Number(n);
        }
    }
    Value::String(s.to_string())
}

fn strip_quotes(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
