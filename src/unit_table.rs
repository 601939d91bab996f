//! # Unit Table Module
//!
//! This module holds the static mapping from surface-form unit spellings
//! (abbreviations, dotted abbreviations, singular and plural forms) to
//! canonical unit identifiers, plus the package-unit flag used to decide
//! how container blocks fold into a parse result.

use crate::quantity_model::CanonicalUnit;

/// Canonical unit and package flag for one surface spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitEntry {
    /// The normalized identifier this spelling maps to
    pub canonical_unit: CanonicalUnit,
    /// Counting units (cans, packages) where the amount is an object count
    pub is_package_unit: bool,
}

/// Read-only table of unit spellings.
///
/// Built once per parser and never mutated afterwards, so a table (or a
/// parser holding one) can be shared across threads freely. Spellings are
/// scanned longest-first with lexicographic tie-breaking, so the most
/// specific spelling wins no matter the insertion order.
#[derive(Debug, Clone)]
pub struct UnitTable {
    entries: Vec<(&'static str, UnitEntry)>,
}

impl UnitTable {
    /// Build the standard table.
    pub fn new() -> Self {
        let mut entries = Vec::new();

        // english units
        add_spellings(&mut entries, CanonicalUnit::Cup, &["c.", "c", "cup", "cups"], false);
        add_spellings(
            &mut entries,
            CanonicalUnit::FluidOunce,
            &["fl. oz.", "fl oz", "fluid ounce", "fluid ounces"],
            false,
        );
        add_spellings(&mut entries, CanonicalUnit::Gallon, &["gal.", "gal", "gallon", "gallons"], false);
        add_spellings(&mut entries, CanonicalUnit::Ounce, &["oz.", "oz", "ounce", "ounces"], false);
        add_spellings(&mut entries, CanonicalUnit::Pint, &["pt.", "pt", "pint", "pints"], false);
        add_spellings(&mut entries, CanonicalUnit::Pound, &["lb.", "lb", "pound", "pounds"], false);
        add_spellings(
            &mut entries,
            CanonicalUnit::Quart,
            &["qt.", "qt", "qts", "qts.", "quart", "quarts"],
            false,
        );
        add_spellings(
            &mut entries,
            CanonicalUnit::Tablespoon,
            &["tbsp.", "tbsp", "T", "T.", "tablespoon", "tablespoons"],
            false,
        );
        add_spellings(
            &mut entries,
            CanonicalUnit::Teaspoon,
            &["tsp.", "tsp", "t", "t.", "teaspoon", "teaspoons"],
            false,
        );

        // metric units
        add_spellings(&mut entries, CanonicalUnit::Gram, &["g.", "g", "gr", "gr.", "gram", "grams"], false);
        add_spellings(&mut entries, CanonicalUnit::Kilogram, &["kg.", "kg", "kilogram", "kilograms"], false);
        add_spellings(&mut entries, CanonicalUnit::Liter, &["l.", "l", "liter", "liters"], false);
        add_spellings(&mut entries, CanonicalUnit::Milligram, &["mg.", "mg", "milligram", "milligrams"], false);
        add_spellings(&mut entries, CanonicalUnit::Milliliter, &["ml.", "ml", "milliliter", "milliliters"], false);

        // nonstandard units
        add_spellings(&mut entries, CanonicalUnit::Pinch, &["pinch", "pinches"], false);
        add_spellings(&mut entries, CanonicalUnit::Dash, &["dash", "dashes"], false);
        add_spellings(&mut entries, CanonicalUnit::Touch, &["touch", "touches"], false);
        add_spellings(&mut entries, CanonicalUnit::Handful, &["handful", "handfuls"], false);
        add_spellings(&mut entries, CanonicalUnit::Glass, &["glass", "glasses"], false);

        // package-style units
        add_spellings(&mut entries, CanonicalUnit::Can, &["can", "cans"], true);
        add_spellings(&mut entries, CanonicalUnit::Package, &["packages", "package"], true);
        add_spellings(&mut entries, CanonicalUnit::Container, &["containers", "container"], true);
        add_spellings(&mut entries, CanonicalUnit::Square, &["squares", "square"], true);
        add_spellings(&mut entries, CanonicalUnit::Slice, &["slices", "slice"], true);

        // longest spelling first so the most specific match always wins
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(b.0)));

        Self { entries }
    }

    /// Find the entry whose spelling leads `text`.
    ///
    /// A spelling only matches when followed by at least one non-word
    /// character, so `cup` matches `"cup diced tomatoes"` but neither
    /// `"cupcake"` nor a bare `"cup"`. Matching is case-sensitive; callers
    /// wanting a case-insensitive pass lower-case the text themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ingredient_quantity::{CanonicalUnit, UnitTable};
    ///
    /// let table = UnitTable::new();
    /// let (spelling, entry) = table.lookup_prefix("cups milk").unwrap();
    ///
    /// assert_eq!(spelling, "cups");
    /// assert_eq!(entry.canonical_unit, CanonicalUnit::Cup);
    /// assert!(table.lookup_prefix("cupcake batter").is_none());
    /// ```
    pub fn lookup_prefix(&self, text: &str) -> Option<(&'static str, &UnitEntry)> {
        self.entries
            .iter()
            .find(|(spelling, _)| starts_with_spelling(text, spelling))
            .map(|(spelling, entry)| (*spelling, entry))
    }

    /// Number of spellings in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no spellings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All spellings with their entries, in scan order.
    pub fn spellings(&self) -> impl Iterator<Item = (&'static str, &UnitEntry)> + '_ {
        self.entries.iter().map(|(spelling, entry)| (*spelling, entry))
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}

fn add_spellings(
    entries: &mut Vec<(&'static str, UnitEntry)>,
    canonical_unit: CanonicalUnit,
    spellings: &[&'static str],
    is_package_unit: bool,
) {
    for spelling in spellings {
        entries.push((
            spelling,
            UnitEntry {
                canonical_unit,
                is_package_unit,
            },
        ));
    }
}

// Word characters are alphanumerics plus underscore; the spelling must be
// followed by at least one character outside that set.
fn starts_with_spelling(text: &str, spelling: &str) -> bool {
    match text.strip_prefix(spelling) {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(false, |c| !c.is_alphanumeric() && c != '_'),
        None => false,
    }
}
