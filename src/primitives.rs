//! Shared primitives used by the evaluator and the engine.
//!
//! Path access into nested state, message formatting, the string format
//! predicates, and the value coercions that give rule comparisons their
//! host-native semantics.

use regex::Regex;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::sync::LazyLock;

// ─── Path access ────────────────────────────────────────────────────────────

/// Resolves a dot-path against a value tree.
///
/// Segments descend into objects by key and into arrays by decimal index.
/// Returns `None` if any segment fails to resolve. Empty path returns the
/// root value.
pub fn resolve_path(path: &str, value: &Value) -> Option<Value> {
    resolve_path_ref(path, value).cloned()
}

/// Borrowing form of [`resolve_path`].
pub fn resolve_path_ref<'a>(path: &str, value: &'a Value) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(obj) => obj.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Largest number of `null` slots a single write may pad an array with.
pub const MAX_ARRAY_GAP: usize = 1024;

/// Writes `new_value` at a dot-path, creating intermediate containers.
///
/// Missing segments become objects. An intermediate that is neither an object
/// nor an array indexed by a decimal segment is replaced by an object. Writing
/// past the end of an array pads it with `null`; an index more than
/// [`MAX_ARRAY_GAP`] past the end is treated as an object key instead, which
/// replaces the array. Empty path replaces the root.
pub fn write_path(root: &mut Value, path: &str, new_value: Value) {
    if path.is_empty() {
        *root = new_value;
        return;
    }

    let mut current = root;
    for segment in path.split('.') {
        current = child_mut(current, segment);
    }
    *current = new_value;
}

fn child_mut<'a>(node: &'a mut Value, segment: &str) -> &'a mut Value {
    match segment.parse::<usize>() {
        Ok(index)
            if node
                .as_array()
                .is_some_and(|items| index.saturating_sub(items.len()) <= MAX_ARRAY_GAP) =>
        {
            if let Value::Array(items) = &mut *node
                && items.len() <= index
            {
                items.resize(index + 1, Value::Null);
            }
            &mut node[index]
        }
        _ => {
            if !node.is_object() {
                *node = Value::Object(Map::new());
            }
            &mut node[segment]
        }
    }
}

// ─── Message formatting ─────────────────────────────────────────────────────

/// Substitutes positional placeholders in a message template.
///
/// An array parameter fills `{0}`, `{1}`, ... from its elements; any other
/// parameter fills every `{0}`. Placeholders without a matching element are
/// left untouched.
///
/// ```
/// use serde_json::json;
/// let msg = fieldrules::primitives::format_message(
///     "Please enter a value between {0} and {1} characters long.",
///     &json!([3, 10]),
/// );
/// assert_eq!(msg, "Please enter a value between 3 and 10 characters long.");
/// ```
pub fn format_message(template: &str, parameter: &Value) -> String {
    match parameter {
        Value::Array(items) => {
            let mut message = template.to_string();
            for (index, item) in items.iter().enumerate() {
                message = message.replace(&format!("{{{}}}", index), &value_to_string(item));
            }
            message
        }
        other => template.replace("{0}", &value_to_string(other)),
    }
}

/// Renders a value the way it appears inside messages and format checks.
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        // Whole floats render without a trailing `.0`
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        // Objects and arrays serialize to compact JSON
        _ => serde_json::to_string(v).unwrap_or_default(),
    }
}

// ─── Format predicates ──────────────────────────────────────────────────────

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+]?[0-9]+$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+@[A-Za-z0-9_.]+[A-Za-z0-9_]$").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:https?://)?[A-Za-z0-9_.-]+(?:\.[A-Za-z0-9_.-]+)+[A-Za-z0-9_\-.~:/?#\[\]@!$&'()*+,;=]+$",
    )
    .unwrap()
});

static UUID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9A-F]{8}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{4}-[0-9A-F]{12}$").unwrap()
});

/// Digits with an optional leading `+`.
pub fn is_phone(input: &str) -> bool {
    PHONE_RE.is_match(input)
}

/// Loose `local@domain` shape: word characters, an `@`, then a domain of word
/// characters and dots that ends in a word character.
pub fn is_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Host name with at least one dot, optional `http://` or `https://` scheme,
/// and an optional tail of URL-safe characters.
pub fn is_url(input: &str) -> bool {
    URL_RE.is_match(input)
}

/// 8-4-4-4-12 hexadecimal groups, case-insensitive.
pub fn is_uuid(input: &str) -> bool {
    UUID_RE.is_match(input)
}

// ─── Coercion ───────────────────────────────────────────────────────────────

/// Empty means absent, `null`, or the empty string.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
        || matches!(value, Some(Value::String(s)) if s.is_empty())
}

/// Numeric coercion of a field value. Absent values, arrays, objects and
/// unparseable strings produce NaN.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => f64::from(u8::from(*b)),
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => string_to_number(s),
        _ => f64::NAN,
    }
}

fn string_to_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    // Rust accepts "inf" and "nan" spellings that a form value never means
    // as a number.
    let lower = trimmed.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Orders two values: strings lexicographically, everything else by numeric
/// coercion. Returns `None` when the values are incomparable (absent side or
/// NaN after coercion).
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Option<Ordering> {
    match (a?, b?) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (a, b) => to_number(Some(a)).partial_cmp(&to_number(Some(b))),
    }
}

/// Strict equality: no coercion between types, but numbers compare by value,
/// so `1` equals `1.0`.
pub fn strict_equals(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
        (a, b) => a == b,
    }
}

/// Length of a string in characters, or of an array in elements.
pub fn value_length(value: Option<&Value>) -> Option<usize> {
    match value? {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// String form used by the format predicates and `pattern`. Absent values
/// become the empty string.
pub fn coerce_to_string(value: Option<&Value>) -> String {
    value.map(value_to_string).unwrap_or_default()
}
