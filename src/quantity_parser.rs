//! # Quantity Parser
//!
//! This module parses a single free-text recipe ingredient line (e.g.
//! `"2 (14.5 oz) cans diced tomatoes"`) into a structured quantity and the
//! remaining ingredient name.
//!
//! ## Pipeline
//!
//! - Segment extraction: one pattern match splits the query into optional
//!   amount, fraction, and container captures plus the mandatory
//!   unit-and-ingredient remainder
//! - Unit resolution: the remainder is scanned against the unit table,
//!   case-sensitively and then once more lower-cased
//! - Amount arithmetic: amount and fraction combine into one number,
//!   scaled by the container amount unless a package unit was detected
//!
//! Each stage takes the prior stage's values and returns new ones; no
//! shared buffer is mutated in place.
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_quantity::QuantityParser;
//!
//! let parser = QuantityParser::new();
//! let parsed = parser.parse("1 1/2 cups milk")?;
//!
//! assert_eq!(parsed.amount, 1.5);
//! assert_eq!(parsed.unit_name(), "cup");
//! assert_eq!(parsed.ingredient, "milk");
//! # Ok::<(), ingredient_quantity::ParseError>(())
//! ```

use crate::quantity_model::{CanonicalUnit, ParsedQuantity};
use crate::segment_patterns::SEGMENT_REGEX;
use crate::unit_table::{UnitEntry, UnitTable};
use log::{debug, trace};
use std::fmt;

/// Candidate substrings captured from a single query line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    /// Numeric literal, possibly with one leading placeholder character
    pub amount_text: Option<String>,
    /// `"N/D"` fraction token
    pub fraction_text: Option<String>,
    /// Numeric amount inside a container block
    pub container_amount_text: Option<String>,
    /// Free-text unit inside a container block
    pub container_unit_text: Option<String>,
    /// Full `"(amount unit)"` block
    pub container_block_text: Option<String>,
    /// Unit token (if any) plus ingredient name; always present
    pub remainder_text: String,
}

impl Segments {
    /// Decompose a query line into its segments.
    ///
    /// Returns `None` when the mandatory remainder cannot be located,
    /// which is the case for empty input.
    pub fn from_query(query: &str) -> Option<Self> {
        let captures = SEGMENT_REGEX.captures(query)?;
        let text = |name: &str| captures.name(name).map(|m| m.as_str().to_string());

        // the two fraction slots carry one meaning; the trailing slot wins
        let fraction_text = text("fraction_trail").or_else(|| text("fraction_lead"));

        let segments = Self {
            amount_text: text("amount"),
            fraction_text,
            container_amount_text: text("container_amount"),
            container_unit_text: text("container_unit"),
            container_block_text: text("container_block"),
            remainder_text: captures.name("remainder")?.as_str().to_string(),
        };
        trace!("decomposed {:?} into {:?}", query, segments);
        Some(segments)
    }

    /// The `"amount unit"` text of the container block, without
    /// parentheses, when the block carries at least one letter.
    /// Numeric-only blocks contribute nothing.
    pub fn container_descriptor(&self) -> Option<String> {
        let amount = self.container_amount_text.as_deref()?;
        let unit = self.container_unit_text.as_deref()?;
        let descriptor = format!("{} {}", amount.trim(), unit.trim());
        if descriptor.chars().any(|c| c.is_ascii_alphabetic()) {
            Some(descriptor)
        } else {
            None
        }
    }
}

/// Parses ingredient lines against a unit table built once at construction.
///
/// Construct one parser and reuse it across calls; each `parse` is a pure
/// function of its input and the immutable table.
pub struct QuantityParser {
    units: UnitTable,
}

impl QuantityParser {
    /// Create a parser with the standard unit table.
    pub fn new() -> Self {
        Self::with_table(UnitTable::new())
    }

    /// Create a parser around an explicitly provided unit table.
    pub fn with_table(units: UnitTable) -> Self {
        Self { units }
    }

    /// Parse one ingredient line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_quantity::QuantityParser;
    ///
    /// let parser = QuantityParser::new();
    ///
    /// let parsed = parser.parse("2 cups flour")?;
    /// assert_eq!(parsed.amount, 2.0);
    /// assert_eq!(parsed.unit_name(), "cup");
    /// assert_eq!(parsed.ingredient, "flour");
    /// assert!(!parsed.is_package_unit);
    /// # Ok::<(), ingredient_quantity::ParseError>(())
    /// ```
    pub fn parse(&self, query: &str) -> Result<ParsedQuantity, ParseError> {
        let segments = Segments::from_query(query).ok_or(ParseError::MalformedQuery)?;
        let (unit, ingredient, is_package_unit) = self.resolve_unit(&segments);
        let amount = compute_amount(&segments, is_package_unit)?;

        debug!(
            "parsed {:?} -> amount {}, unit {:?}, ingredient {:?}, package {}",
            query, amount, unit, ingredient, is_package_unit
        );

        Ok(ParsedQuantity {
            amount,
            unit,
            ingredient,
            is_package_unit,
        })
    }

    fn resolve_unit(&self, segments: &Segments) -> (Option<CanonicalUnit>, String, bool) {
        let remainder = segments.remainder_text.as_str();
        if let Some((spelling, entry)) = self.units.lookup_prefix(remainder) {
            trace!("unit spelling {:?} matched case-sensitively", spelling);
            return apply_unit(remainder, spelling, entry, segments);
        }

        // The fallback pass works on a lower-cased remainder; the
        // lower-casing sticks in the ingredient text even when this pass
        // finds nothing.
        let lowered = remainder.to_lowercase();
        if let Some((spelling, entry)) = self.units.lookup_prefix(&lowered) {
            trace!("unit spelling {:?} matched after lower-casing", spelling);
            return apply_unit(&lowered, spelling, entry, segments);
        }

        (None, lowered.trim().to_string(), false)
    }
}

impl Default for QuantityParser {
    fn default() -> Self {
        Self::new()
    }
}

// Strip the matched spelling and, for package units, fold the container
// text into the ingredient name.
fn apply_unit(
    remainder: &str,
    spelling: &str,
    entry: &UnitEntry,
    segments: &Segments,
) -> (Option<CanonicalUnit>, String, bool) {
    let stripped = remainder.replacen(spelling, "", 1);

    if entry.is_package_unit {
        // The container block describes the size of one package, so it
        // stays attached to the ingredient name; the amount counts packages.
        let ingredient = match segments.container_descriptor() {
            Some(descriptor) => format!("{} {}", descriptor, stripped.trim())
                .trim()
                .to_string(),
            None => stripped.trim().to_string(),
        };
        (None, ingredient, true)
    } else {
        (Some(entry.canonical_unit), stripped.trim().to_string(), false)
    }
}

fn compute_amount(segments: &Segments, is_package_unit: bool) -> Result<f64, ParseError> {
    let fraction = match segments.fraction_text.as_deref() {
        Some(text) => parse_fraction(text)?,
        None => 0.0,
    };
    let base = match segments.amount_text.as_deref() {
        Some(text) => parse_amount(text)?,
        None => 0.0,
    } + fraction;

    match segments.container_amount_text.as_deref() {
        // a container amount scales a plain unit; for package units the
        // amount already counts containers
        Some(container) if !is_package_unit => Ok(base * parse_number(container)?),
        _ => Ok(base),
    }
}

// One arbitrary placeholder character may precede the digits; drop it
// before conversion so the captured literal is all that gets parsed.
fn parse_amount(text: &str) -> Result<f64, ParseError> {
    let digits = match text.chars().next() {
        Some(first) if !first.is_ascii_digit() => &text[first.len_utf8()..],
        _ => text,
    };
    parse_number(digits).map_err(|_| ParseError::NumericParse(text.to_string()))
}

fn parse_fraction(text: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::NumericParse(text.to_string());
    let (numerator, denominator) = text.split_once('/').ok_or_else(invalid)?;
    let numerator: f64 = numerator.parse().map_err(|_| invalid())?;
    let denominator: f64 = denominator.parse().map_err(|_| invalid())?;
    if denominator == 0.0 {
        return Err(invalid());
    }
    Ok(numerator / denominator)
}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    text.parse::<f64>()
        .map_err(|_| ParseError::NumericParse(text.to_string()))
}

/// Errors surfaced by [`QuantityParser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The query does not decompose into the mandatory remainder segment
    MalformedQuery,
    /// A captured amount, fraction, or container-amount substring could
    /// not be converted to a number
    NumericParse(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedQuery => write!(f, "query has no parsable ingredient text"),
            ParseError::NumericParse(text) => write!(f, "invalid numeric text: {}", text),
        }
    }
}

impl std::error::Error for ParseError {}
