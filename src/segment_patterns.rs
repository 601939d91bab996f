//! # Segment Patterns Module
//!
//! This module contains the regex pattern used to decompose a raw
//! ingredient query line into its candidate segments.

use lazy_static::lazy_static;
use regex::Regex;

// A query line is structured left-to-right as
// `[fraction ] [amount ] [fraction ] [(container_amount container_unit) ] remainder`
// with every prefix part optional and the remainder mandatory. The two
// fraction slots tolerate "1 1/2" forms where the fraction trails the
// amount; the amount may carry one arbitrary placeholder character before
// its digits. The container unit runs greedily to the closing parenthesis.
pub const SEGMENT_PATTERN: &str = r"(?:(?P<fraction_lead>\d+/\d+)\s)?(?:(?P<amount>.?\d+(?:\.\d+)?)\s?)?(?:(?P<fraction_trail>\d+/\d+)\s)?(?:(?P<container_block>\((?P<container_amount>\d+(?:\.\d+)?)\s(?P<container_unit>.+)\))\s)?(?P<remainder>.+)";

// Lazy static regex for the segment pattern to avoid recompilation
lazy_static! {
    pub static ref SEGMENT_REGEX: Regex =
        Regex::new(SEGMENT_PATTERN).expect("Segment pattern should be valid");
}
