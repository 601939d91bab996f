//! # Ingredient Quantity
//!
//! Parses free-text recipe ingredient lines like `2 (14.5 oz) cans diced
//! tomatoes` into a structured amount, canonical unit, and ingredient name.
//!
//! ## Features
//!
//! - Amounts as integers, decimals, and fractions (`1 1/2 cups milk`)
//! - Unit normalization across abbreviations, dotted forms, and plurals
//!   (`c.`, `c`, `cup`, `cups` → `cup`)
//! - Package-style units (`cans`, `packages`) whose container size stays
//!   attached to the ingredient name while the amount counts containers
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_quantity::QuantityParser;
//!
//! let parser = QuantityParser::new();
//! let parsed = parser.parse("2 (14.5 oz) cans diced tomatoes")?;
//!
//! assert_eq!(parsed.amount, 2.0);
//! assert_eq!(parsed.unit_name(), "");
//! assert_eq!(parsed.ingredient, "14.5 oz diced tomatoes");
//! assert!(parsed.is_package_unit);
//! # Ok::<(), ingredient_quantity::ParseError>(())
//! ```

pub mod quantity_model;
pub mod quantity_parser;
pub mod segment_patterns;
pub mod unit_table;

pub use quantity_model::{CanonicalUnit, ParsedQuantity};
pub use quantity_parser::{ParseError, QuantityParser, Segments};
pub use unit_table::{UnitEntry, UnitTable};

/// Parse a single ingredient line with a freshly built parser.
///
/// Convenience for one-off calls; when parsing many lines, construct a
/// [`QuantityParser`] once and reuse it, since it builds its unit table
/// up front.
///
/// # Examples
///
/// ```rust
/// let parsed = ingredient_quantity::parse("1/2 cup sugar")?;
///
/// assert_eq!(parsed.amount, 0.5);
/// assert_eq!(parsed.unit_name(), "cup");
/// assert_eq!(parsed.ingredient, "sugar");
/// # Ok::<(), ingredient_quantity::ParseError>(())
/// ```
pub fn parse(query: &str) -> Result<ParsedQuantity, ParseError> {
    QuantityParser::new().parse(query)
}
