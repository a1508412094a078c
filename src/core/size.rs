//! Human-readable byte sizes for model labels.

use serde_json::Value;

/// Label used when a size is missing or cannot be read as an integer.
pub const UNKNOWN_SIZE: &str = "unknown";

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const LAST_UNIT: &str = "PB";

/// Format a raw `size` value from the API as e.g. `"3.7 GB"`.
///
/// Accepts whatever the server sent: integers, floats (truncated), booleans,
/// and numeric strings. Anything else, or no value at all, yields `"unknown"`.
pub fn format_size(size: Option<&Value>) -> String {
    if let Some(bytes) = size.and_then(Value::as_u64) {
        return format_bytes(bytes);
    }
    match size.and_then(coerce_integer) {
        Some(value) => scale(value),
        None => UNKNOWN_SIZE.to_string(),
    }
}

/// Format an already-typed byte count.
pub fn format_bytes(bytes: u64) -> String {
    scale(bytes as f64)
}

fn scale(mut value: f64) -> String {
    for unit in UNITS {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    // Past TB the unit is pinned; the number keeps growing.
    format!("{:.1} {}", value, LAST_UNIT)
}

/// Integer value of `value`, widened to f64 so oversized counts still render.
fn coerce_integer(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(|i| i as f64)
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(f64::trunc)),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        Value::String(s) => parse_integer_text(s),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Base-10 integer with optional sign and surrounding whitespace.
/// Single underscores may separate digit groups (`1_000`).
fn parse_integer_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let groups_ok = body
        .split('_')
        .all(|g| !g.is_empty() && g.bytes().all(|b| b.is_ascii_digit()));
    if !groups_ok {
        return None;
    }
    let digits = body.replace('_', "");
    let magnitude = match digits.parse::<u128>() {
        Ok(n) => n as f64,
        Err(_) => digits.parse::<f64>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}
