//! Lenient integer parsing for stored preference values

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\s\x{FEFF}]*([+-]?[0-9]+)").expect("valid leading integer regex"));

/// Parse the base-10 integer at the start of `raw`
///
/// Leading whitespace (including a byte order mark) and a sign are accepted.
/// Only ASCII digits count, and anything after them is ignored, so `" 2abc"`
/// and `"2٣"` both parse as 2. Returns `None` when no digits lead
/// the text or the value does not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let digits = LEADING_INT.captures(raw)?.get(1)?.as_str();
    digits.parse().ok()
}
