//! Pure encoders that turn raw request parts into JSON values.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};
use url::form_urlencoded;

/// Marker stored in the `encoding` field of a body that was not valid UTF-8.
pub const BODY_ENCODING_BASE64: &str = "base64";

/// Parses a raw query string into a JSON object.
///
/// - A key seen once maps to its decoded string value.
/// - A repeated key maps to an array of its values, in order.
/// - A key without `=` maps to `null`.
///
/// A leading `?` is ignored, as are empty segments and empty keys.
pub fn parse_query(raw: Option<&str>) -> Map<String, Value> {
    let mut params = Map::new();
    let Some(raw) = raw else {
        return params;
    };
    let raw = raw.strip_prefix('?').unwrap_or(raw);

    for segment in raw.split('&').filter(|s| !s.is_empty()) {
        let Some((key, value)) = form_urlencoded::parse(segment.as_bytes()).next() else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let value = if segment.contains('=') {
            Value::String(value.into_owned())
        } else {
            Value::Null
        };

        match params.get_mut(key.as_ref()) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                params.insert(key.into_owned(), value);
            }
        }
    }

    params
}

/// Parses the query portion of a request target such as `/a/b?x=1&y=2`.
pub fn query_from_target(target: &str) -> Map<String, Value> {
    parse_query(target.split_once('?').map(|(_, query)| query))
}

/// Encodes a request body as a JSON value without losing bytes.
///
/// UTF-8 bodies become a JSON string holding the exact text. Anything else is
/// stored as `{"encoding": "base64", "data": "..."}`.
pub fn encode_body(bytes: &[u8]) -> Value {
    match std::str::from_utf8(bytes) {
        Ok(text) => Value::String(text.to_string()),
        Err(_) => json!({
            "encoding": BODY_ENCODING_BASE64,
            "data": STANDARD.encode(bytes),
        }),
    }
}

/// Inverse of [`encode_body`]. Returns `None` for values it did not produce.
pub fn decode_body(value: &Value) -> Option<Vec<u8>> {
    match value {
        Value::String(text) => Some(text.as_bytes().to_vec()),
        Value::Object(fields) => {
            if fields.get("encoding").and_then(Value::as_str) != Some(BODY_ENCODING_BASE64) {
                return None;
            }
            let data = fields.get("data").and_then(Value::as_str)?;
            STANDARD.decode(data).ok()
        }
        _ => None,
    }
}
