//! # Unit Normalization Module
//!
//! This module maps raw unit tokens (plurals, abbreviations) to canonical units
//! and converts the volume-convertible units onto a common tablespoon base.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::units::{normalize, to_base, Unit};
//! use fraction::BigFraction;
//!
//! assert_eq!(normalize("cups"), Unit::Cup);
//! assert_eq!(normalize("sprigs"), Unit::Other("sprigs".to_string()));
//!
//! let tbsp = to_base(&BigFraction::new(1u64, 2u64), &Unit::Cup);
//! assert_eq!(tbsp, Some(BigFraction::new(8u64, 1u64)));
//! ```

use fraction::BigFraction;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Canonical measurement units
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    // Volume-convertible units
    /// Cups (16 tbsp)
    Cup,
    /// Tablespoons (base unit)
    Tbsp,
    /// Teaspoons (1/3 tbsp)
    Tsp,

    // Weight and metric volume, only summed against themselves
    Oz,
    G,
    Kg,
    Ml,
    L,

    // Count and size descriptors
    Large,
    Small,
    Can,
    Slice,
    Clove,
    Pinch,
    Package,

    /// Unrecognized token, kept verbatim
    Other(String),
}

/// Alias table: plurals and abbreviations to canonical units
static UNIT_ALIASES: LazyLock<HashMap<&'static str, Unit>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("cups", Unit::Cup);
    map.insert("cup", Unit::Cup);
    map.insert("c", Unit::Cup);
    map.insert("tablespoons", Unit::Tbsp);
    map.insert("tablespoon", Unit::Tbsp);
    map.insert("tbsp", Unit::Tbsp);
    map.insert("tbsp.", Unit::Tbsp);
    map.insert("tbs", Unit::Tbsp);
    map.insert("teaspoons", Unit::Tsp);
    map.insert("teaspoon", Unit::Tsp);
    map.insert("tsp", Unit::Tsp);
    map.insert("tsp.", Unit::Tsp);

    // Weight units
    map.insert("ounces", Unit::Oz);
    map.insert("ounce", Unit::Oz);
    map.insert("oz", Unit::Oz);
    map.insert("grams", Unit::G);
    map.insert("gram", Unit::G);
    map.insert("g", Unit::G);
    map.insert("kilograms", Unit::Kg);
    map.insert("kg", Unit::Kg);

    // Metric volume
    map.insert("milliliters", Unit::Ml);
    map.insert("ml", Unit::Ml);
    map.insert("liters", Unit::L);
    map.insert("l", Unit::L);

    // Count units
    map.insert("large", Unit::Large);
    map.insert("small", Unit::Small);
    map.insert("can", Unit::Can);
    map.insert("cans", Unit::Can);
    map.insert("slice", Unit::Slice);
    map.insert("slices", Unit::Slice);
    map.insert("clove", Unit::Clove);
    map.insert("cloves", Unit::Clove);
    map.insert("pinch", Unit::Pinch);
    map.insert("package", Unit::Package);
    map.insert("packages", Unit::Package);

    map
});

/// Tablespoon-equivalent factors as (numerator, denominator)
const CUP_IN_TBSP: (u64, u64) = (16, 1);
const TBSP_IN_TBSP: (u64, u64) = (1, 1);
const TSP_IN_TBSP: (u64, u64) = (1, 3);

impl Unit {
    /// Canonical identifier used in display strings
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Cup => "cup",
            Unit::Tbsp => "tbsp",
            Unit::Tsp => "tsp",
            Unit::Oz => "oz",
            Unit::G => "g",
            Unit::Kg => "kg",
            Unit::Ml => "ml",
            Unit::L => "l",
            Unit::Large => "large",
            Unit::Small => "small",
            Unit::Can => "can",
            Unit::Slice => "slice",
            Unit::Clove => "clove",
            Unit::Pinch => "pinch",
            Unit::Package => "package",
            Unit::Other(token) => token,
        }
    }

    /// Whether this unit takes part in cross-unit volume summation
    pub fn is_volume_convertible(&self) -> bool {
        matches!(self, Unit::Cup | Unit::Tbsp | Unit::Tsp)
    }

    fn tbsp_factor(&self) -> Option<(u64, u64)> {
        match self {
            Unit::Cup => Some(CUP_IN_TBSP),
            Unit::Tbsp => Some(TBSP_IN_TBSP),
            Unit::Tsp => Some(TSP_IN_TBSP),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a raw unit token to its canonical unit.
///
/// Lookup is exact; tokens missing from the alias table are returned as
/// [`Unit::Other`] with their original spelling.
pub fn normalize(token: &str) -> Unit {
    match UNIT_ALIASES.get(token) {
        Some(unit) => unit.clone(),
        None => Unit::Other(token.to_string()),
    }
}

/// Convert a volume-convertible quantity to tablespoons.
///
/// Returns `None` for every unit outside {cup, tbsp, tsp}; callers group
/// those by exact unit instead.
pub fn to_base(quantity: &BigFraction, unit: &Unit) -> Option<BigFraction> {
    let (numer, denom) = unit.tbsp_factor()?;
    Some(quantity.clone() * BigFraction::new(numer, denom))
}
