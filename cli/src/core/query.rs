use crate::core::json::{coerce_numeric, parse_relaxed, value_to_plain, Fields, RelaxedMode};
use serde_json::Value;

/// Encode a raw `--query`/`--data` string as `application/x-www-form-urlencoded`.
///
/// Strict JSON objects are used as-is. Other input goes through the relaxed
/// grammar, where parts without both a key and a value are dropped. JSON that
/// is not an object encodes to nothing.
pub fn encode_query_str(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let fields = match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => coerce_numeric(map),
        Ok(_) => Fields::new(),
        Err(_) => parse_relaxed(input, RelaxedMode::KeyAndValue),
    };

    encode_fields(&fields)
}

/// Encode an already parsed mapping, preserving key order.
pub fn encode_fields(fields: &Fields) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (k.as_str(), value_to_plain(v))))
        .finish()
}
