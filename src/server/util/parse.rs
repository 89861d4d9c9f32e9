//! Parsing of client-supplied identifiers.
//!
//! Ids arrive as path segments, query strings and JSON numbers. Only strictly
//! positive values that fit an `i32` primary key are accepted; callers decide which
//! status an unusable id is answered with.

/// Parses a strictly positive `i32` id from a string.
///
/// # Arguments
/// - `value` - Raw path or query value
///
/// # Returns
/// - `Some(i32)` - Parsed id greater than zero
/// - `None` - Value is not an integer, is zero or negative, or overflows `i32`
pub fn parse_positive_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// Narrows a JSON number to a strictly positive `i32` id.
pub fn positive_id(value: i64) -> Option<i32> {
    i32::try_from(value).ok().filter(|id| *id > 0)
}
