//! 7-bit ASCII checks for header strings.

/// Returns `true` if `value` contains any character outside the 7-bit ASCII
/// range, i.e. any character whose UTF-8 encoding is longer than one byte.
pub(crate) fn contains_non_ascii(value: &str) -> bool {
    value.bytes().any(|b| !b.is_ascii())
}
