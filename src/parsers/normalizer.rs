use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::models::Prospect;
use crate::pipeline::SearchError;

/// Values the model uses to mean "no data"; compared trimmed and case-insensitively
pub const PLACEHOLDERS: [&str; 9] = [
    "n/a",
    "none",
    "unknown",
    "null",
    "pending",
    "no phone",
    "no email",
    "not found",
    "contact via web",
];

const DEFAULT_NAME: &str = "Unnamed Business";
const DEFAULT_ADDRESS: &str = "Address not listed";
const DEFAULT_CITY: &str = "City not listed";
const DEFAULT_ZIP: &str = "Zip not listed";
const DEFAULT_NOTES: &str = "Commercial prospect identified through maps and web search.";

pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    PLACEHOLDERS.iter().any(|p| p.eq_ignore_ascii_case(value))
}

/// Normalize a parsed record list
///
/// Every element yields a prospect: malformed elements are defaulted, never
/// dropped. A non-array value or an empty array is [`SearchError::EmptyResult`].
pub fn normalize(raw: &Value) -> Result<Vec<Prospect>, SearchError> {
    let records = match raw {
        Value::Array(records) if !records.is_empty() => records,
        _ => return Err(SearchError::EmptyResult),
    };

    Ok(records.iter().map(normalize_record).collect())
}

/// Normalize one record. Missing keys take defaults; placeholders become empty.
pub fn normalize_record(raw: &Value) -> Prospect {
    let empty = Map::new();
    let fields = match raw {
        Value::Object(map) => map,
        other => {
            debug!(kind = json_kind(other), "Defaulting non-object record");
            &empty
        }
    };

    let field = |key: &str, default: &str| clean_field(fields.get(key), default);

    Prospect {
        name: field("name", DEFAULT_NAME),
        phone: field("phone", ""),
        email: field("email", ""),
        address: field("address", DEFAULT_ADDRESS),
        city: field("city", DEFAULT_CITY),
        state: field("state", ""),
        zip: field("zip", DEFAULT_ZIP),
        notes: field("notes", DEFAULT_NOTES),
    }
}

/// Apply the per-field rules to an already-typed prospect (idempotent)
pub fn renormalize(prospect: &Prospect) -> Prospect {
    let clean = |s: &str| if is_placeholder(s) { String::new() } else { s.trim().to_string() };
    Prospect {
        name: clean(&prospect.name),
        phone: clean(&prospect.phone),
        email: clean(&prospect.email),
        address: clean(&prospect.address),
        city: clean(&prospect.city),
        state: clean(&prospect.state),
        zip: clean(&prospect.zip),
        notes: clean(&prospect.notes),
    }
}

/// Integral floats (a zip sent as `21201.0`) render without the fraction
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn clean_field(value: Option<&Value>, default: &str) -> String {
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Bool(b)) => b.to_string(),
        // Missing, null, arrays and objects carry no usable text
        _ => return default.to_string(),
    };

    if is_placeholder(&text) { String::new() } else { text }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
