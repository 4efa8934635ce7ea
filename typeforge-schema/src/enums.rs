//! Symbolic name → value maps for enum-like objects.
//!
//! Integer-valued enums reflected from a host carry a reverse mapping
//! (`"0" → "A"`) alongside the symbolic entries (`"A" → 0`). Only the symbolic
//! entries are kept.

use serde_json::{Map, Value};

/// Returns the symbolic entries of `enum_object`, in declared order.
///
/// A key is dropped when it starts with an integer, optionally preceded by
/// whitespace and a sign (`"0"`, `" -1"`, `"2px"`). The filter looks at keys
/// only, so a string-valued member whose name is numeric is dropped too.
pub fn enum_values_of(enum_object: &Map<String, Value>) -> Map<String, Value> {
    enum_object
        .iter()
        .filter(|(key, _)| !has_integer_prefix(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Same as [`enum_values_of`] for an ordered list of `(name, value)` pairs.
pub fn enum_values_of_pairs<K, I>(pairs: I) -> Map<String, Value>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value))
        .filter(|(key, _)| !has_integer_prefix(key))
        .collect()
}

fn has_integer_prefix(key: &str) -> bool {
    let rest = key.trim_start();
    let rest = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('+'))
        .unwrap_or(rest);
    rest.starts_with(|c: char| c.is_ascii_digit())
}
