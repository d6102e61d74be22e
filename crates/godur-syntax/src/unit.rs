//! Unit spellings and their nanosecond multipliers.

use godur_core::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND, NANOS_PER_MILLISECOND, NANOS_PER_MINUTE,
    NANOS_PER_SECOND, NANOS_PER_WEEK, NANOS_PER_YEAR,
};

/// Collapse alias spellings to their short form (`min` -> `m`, `sec` -> `s`).
///
/// Matches the whole accumulated token, never a prefix, so `mi` and `se`
/// stay unknown.
pub fn normalize_unit(unit: &str) -> &str {
    match unit {
        "min" => "m",
        "sec" => "s",
        _ => unit,
    }
}

/// Look up the nanosecond multiplier for a unit spelling.
///
/// Spellings are strict lowercase; `µ` is accepted for microseconds.
pub fn lookup_unit(unit: &str) -> Option<i64> {
    let nanos = match unit {
        "ns" => 1,
        "us" | "µs" => NANOS_PER_MICROSECOND,
        "ms" => NANOS_PER_MILLISECOND,
        "s" | "sec" => NANOS_PER_SECOND,
        "m" | "min" => NANOS_PER_MINUTE,
        "h" => NANOS_PER_HOUR,
        "d" | "day" => NANOS_PER_DAY,
        "w" | "week" => NANOS_PER_WEEK,
        "y" | "yr" => NANOS_PER_YEAR,
        _ => return None,
    };
    Some(nanos)
}
