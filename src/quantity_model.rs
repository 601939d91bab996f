//! # Quantity Data Model
//!
//! This module defines the data structures produced by parsing a single
//! recipe ingredient line: the numeric amount, the canonical unit (if one
//! was recognized), and the remaining ingredient name.
//!
//! ## Core Concepts
//!
//! - **ParsedQuantity**: the structured result of one parse call
//! - **CanonicalUnit**: the normalized identifier all surface spellings of
//!   a unit map to (`c.`, `c`, `cup`, `cups` → `cup`)
//! - **Package unit**: a counting unit (cans, packages) whose amount is an
//!   object count; such results carry no canonical unit
//!
//! ## Usage
//!
//! ```rust
//! use ingredient_quantity::{CanonicalUnit, ParsedQuantity};
//!
//! let parsed = ParsedQuantity {
//!     amount: 2.0,
//!     unit: Some(CanonicalUnit::Cup),
//!     ingredient: "flour".to_string(),
//!     is_package_unit: false,
//! };
//!
//! assert_eq!(parsed.unit_name(), "cup");
//! assert_eq!(parsed.to_string(), "2 cup flour");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized unit identifiers that all surface spellings map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalUnit {
    // English volume and weight units
    /// Cups
    Cup,
    /// Fluid ounces
    FluidOunce,
    /// Gallons
    Gallon,
    /// Ounces
    Ounce,
    /// Pints
    Pint,
    /// Pounds
    Pound,
    /// Quarts
    Quart,
    /// Tablespoons
    Tablespoon,
    /// Teaspoons
    Teaspoon,

    // Metric units
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
    /// Liters
    Liter,
    /// Milligrams
    Milligram,
    /// Milliliters
    Milliliter,

    // Nonstandard units
    /// Pinches (very small amounts)
    Pinch,
    /// Dashes (small amounts)
    Dash,
    /// Touches (trace amounts)
    Touch,
    /// Handfuls
    Handful,
    /// Glasses
    Glass,

    // Package-style counting units
    /// Cans
    Can,
    /// Packages
    Package,
    /// Containers
    Container,
    /// Squares (e.g. baking chocolate)
    Square,
    /// Slices
    Slice,
}

impl CanonicalUnit {
    /// The canonical identifier for this unit (e.g. `fluid_ounce`).
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalUnit::Cup => "cup",
            CanonicalUnit::FluidOunce => "fluid_ounce",
            CanonicalUnit::Gallon => "gallon",
            CanonicalUnit::Ounce => "ounce",
            CanonicalUnit::Pint => "pint",
            CanonicalUnit::Pound => "pound",
            CanonicalUnit::Quart => "quart",
            CanonicalUnit::Tablespoon => "tablespoon",
            CanonicalUnit::Teaspoon => "teaspoon",
            CanonicalUnit::Gram => "gram",
            CanonicalUnit::Kilogram => "kilogram",
            CanonicalUnit::Liter => "liter",
            CanonicalUnit::Milligram => "milligram",
            CanonicalUnit::Milliliter => "milliliter",
            CanonicalUnit::Pinch => "pinch",
            CanonicalUnit::Dash => "dash",
            CanonicalUnit::Touch => "touch",
            CanonicalUnit::Handful => "handful",
            CanonicalUnit::Glass => "glass",
            CanonicalUnit::Can => "can",
            CanonicalUnit::Package => "package",
            CanonicalUnit::Container => "container",
            CanonicalUnit::Square => "square",
            CanonicalUnit::Slice => "slice",
        }
    }
}

impl fmt::Display for CanonicalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Structured result of parsing one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuantity {
    /// The final numeric quantity, with any container multiplier applied
    pub amount: f64,

    /// The canonical unit; absent for package units and unrecognized text
    pub unit: Option<CanonicalUnit>,

    /// The ingredient name, trimmed of surrounding whitespace
    pub ingredient: String,

    /// Whether a counting unit (cans, packages, slices) was detected
    pub is_package_unit: bool,
}

impl ParsedQuantity {
    /// The canonical unit identifier, or `""` when no unit resolved.
    pub fn unit_name(&self) -> &'static str {
        self.unit.map(|unit| unit.name()).unwrap_or("")
    }

    /// Check whether a (non-package) unit was resolved.
    pub fn has_unit(&self) -> bool {
        self.unit.is_some()
    }
}

impl fmt::Display for ParsedQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount > 0.0 {
            if self.amount.fract() == 0.0 {
                write!(f, "{} ", self.amount as i64)?;
            } else {
                write!(f, "{} ", self.amount)?;
            }
        }

        if let Some(unit) = self.unit {
            write!(f, "{} ", unit)?;
        }

        write!(f, "{}", self.ingredient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_names() {
        assert_eq!(CanonicalUnit::Cup.name(), "cup");
        assert_eq!(CanonicalUnit::FluidOunce.name(), "fluid_ounce");
        assert_eq!(CanonicalUnit::Tablespoon.to_string(), "tablespoon");
        assert_eq!(CanonicalUnit::Milliliter.name(), "milliliter");
    }

    #[test]
    fn test_unit_name_accessor() {
        let parsed = ParsedQuantity {
            amount: 2.0,
            unit: Some(CanonicalUnit::Cup),
            ingredient: "flour".to_string(),
            is_package_unit: false,
        };
        assert_eq!(parsed.unit_name(), "cup");
        assert!(parsed.has_unit());

        let no_unit = ParsedQuantity {
            amount: 3.0,
            unit: None,
            ingredient: "large eggs".to_string(),
            is_package_unit: false,
        };
        assert_eq!(no_unit.unit_name(), "");
        assert!(!no_unit.has_unit());
    }

    #[test]
    fn test_display_formatting() {
        let whole = ParsedQuantity {
            amount: 2.0,
            unit: Some(CanonicalUnit::Cup),
            ingredient: "flour".to_string(),
            is_package_unit: false,
        };
        assert_eq!(whole.to_string(), "2 cup flour");

        let fractional = ParsedQuantity {
            amount: 1.5,
            unit: Some(CanonicalUnit::Cup),
            ingredient: "milk".to_string(),
            is_package_unit: false,
        };
        assert_eq!(fractional.to_string(), "1.5 cup milk");

        let package = ParsedQuantity {
            amount: 2.0,
            unit: None,
            ingredient: "14.5 oz diced tomatoes".to_string(),
            is_package_unit: true,
        };
        assert_eq!(package.to_string(), "2 14.5 oz diced tomatoes");

        let bare = ParsedQuantity {
            amount: 0.0,
            unit: None,
            ingredient: "salt".to_string(),
            is_package_unit: false,
        };
        assert_eq!(bare.to_string(), "salt");
    }

    #[test]
    fn test_canonical_identifiers_serialize() {
        // the snake_case identifiers are part of the external contract
        let json = serde_json::to_string(&CanonicalUnit::FluidOunce).unwrap();
        assert_eq!(json, "\"fluid_ounce\"");

        let json = serde_json::to_string(&CanonicalUnit::Cup).unwrap();
        assert_eq!(json, "\"cup\"");
    }
}
