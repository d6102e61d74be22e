//! # godur-core
//!
//! Core duration types for godur that are `no_std` compatible.
//!
//! This crate provides the pieces shared across the workspace:
//! - `ParsedDuration` - a nanosecond count broken into calendar components
//! - `parse_go_duration` - the decomposition itself
//! - the fixed time constants (365-day year, 24-hour day)

#![cfg_attr(not(feature = "std"), no_std)]

mod types;

pub use types::{
    parse_go_duration, ParsedDuration, NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICROSECOND,
    NANOS_PER_MILLISECOND, NANOS_PER_MINUTE, NANOS_PER_SECOND, NANOS_PER_WEEK, NANOS_PER_YEAR,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_YEAR,
};
