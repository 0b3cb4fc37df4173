//! Primitive wire codecs shared by the typed parameter accessors.
//!
//! Every helper here is a pure function over strings. Decoders are
//! permissive: anything the service would not have produced yields `None`
//! (or falls back to the literal form for the list codec) rather than an
//! error, because parameter semantics are validated server-side.

use serde_json::Value;

/// Encode a boolean into its wire form.
pub fn encode_bool(value: bool) -> String {
    if value { "true".to_string() } else { "false".to_string() }
}

/// Decode a boolean from its wire form.
///
/// Accepts case-insensitive `true`/`false`; otherwise any integer literal
/// is taken as a truth value (nonzero = true). Everything else is absent.
pub fn decode_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        return Some(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Some(false);
    }
    raw.parse::<i64>().ok().map(|n| n != 0)
}

/// Decode an unsigned integer; negative or non-numeric input is absent.
pub fn decode_uint(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok()
}

/// Encode a list of strings as a comma-joined literal.
///
/// The comma form (never JSON) is what the service documents for outgoing
/// requests; element commas are therefore not representable.
pub fn encode_string_list(items: &[String]) -> String {
    items.join(",")
}

/// Decode a list of strings.
///
/// A JSON array of strings is tried first; anything else is split on `,`
/// literally. The empty string is the encode image of the empty list and
/// decodes back to it.
pub fn decode_string_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    if let Ok(items) = serde_json::from_str::<Vec<String>>(raw) {
        return items;
    }
    raw.split(',').map(str::to_owned).collect()
}

/// Encode a list of arbitrary JSON values as a JSON array literal.
pub fn encode_json_array(values: &[Value]) -> Option<String> {
    serde_json::to_string(values).ok()
}

/// Decode a JSON array of arbitrary values; malformed JSON is absent.
pub fn decode_json_array(raw: &str) -> Option<Vec<Value>> {
    serde_json::from_str(raw).ok()
}

/// Format a coordinate for the wire.
///
/// Debug formatting of `f64` is the shortest round-trip decimal and keeps
/// a trailing `.0` on integral values, which the geo grammar requires.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Decode a flat comma-separated list of finite floats.
///
/// All-or-nothing: one non-numeric or non-finite field makes the whole
/// list absent. The empty string decodes to the empty list.
pub fn decode_float_list(raw: &str) -> Option<Vec<f64>> {
    if raw.is_empty() {
        return Some(Vec::new());
    }
    let mut fields = Vec::new();
    for field in raw.split(',') {
        let value: f64 = field.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        fields.push(value);
    }
    Some(fields)
}
