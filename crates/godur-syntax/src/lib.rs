//! Scanner and unit table for Go-style duration strings.
//!
//! This crate turns strings like `"1h30m10s"` or `"2w3d4h5m6.7s"` into a
//! total nanosecond count. A duration string is a run of `<number><unit>`
//! tokens with no separators; repeated units sum, fractional numbers are
//! allowed, and `min`/`sec` are accepted as spellings of `m`/`s`.

mod error;
mod scanner;
mod unit;

pub use error::ParseError;
pub use scanner::parse_duration_string;

pub use godur_core::{parse_go_duration, ParsedDuration};
