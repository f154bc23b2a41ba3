//! # Amount Data Model
//!
//! This module defines the structures produced by the amount parser: the
//! tagged numeric literal that was recognized and the parsed entry that
//! carries an exact quantity, a canonical unit and any leftover text.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::amount_model::{NumericLiteral, ParsedEntry};
//! use meal_planner::units::Unit;
//!
//! let literal = NumericLiteral::MixedNumber {
//!     whole: 1u64.into(),
//!     numerator: 1u64.into(),
//!     denominator: 2u64.into(),
//! };
//! let entry = ParsedEntry::new("1 1/2 cups", literal.value(), Some(Unit::Cup));
//! assert!(entry.has_quantity());
//! ```

use crate::units::Unit;
use fraction::{BigFraction, BigUint};

/// The numeric grammar that matched the start of an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericLiteral {
    /// Whole number followed by a fraction (e.g., "1 1/2")
    MixedNumber {
        whole: BigUint,
        numerator: BigUint,
        denominator: BigUint,
    },

    /// Bare fraction (e.g., "3/4")
    SimpleFraction {
        numerator: BigUint,
        denominator: BigUint,
    },

    /// Integer or decimal, stored as an exact ratio (e.g., "1.25" -> 125/100)
    Decimal {
        numerator: BigUint,
        denominator: BigUint,
    },

    /// English number word "one" through "ten"
    WordNumber(u64),

    /// Nothing usable as a number
    Unparseable,
}

impl NumericLiteral {
    /// Exact value of the literal.
    ///
    /// Returns `None` for [`NumericLiteral::Unparseable`] and for any zero
    /// denominator, so "3/0" degrades to an absent quantity.
    pub fn value(&self) -> Option<BigFraction> {
        match self {
            NumericLiteral::MixedNumber {
                whole,
                numerator,
                denominator,
            } => {
                let fraction = ratio(numerator, denominator)?;
                Some(BigFraction::new(whole.clone(), 1u64) + fraction)
            }
            NumericLiteral::SimpleFraction {
                numerator,
                denominator,
            }
            | NumericLiteral::Decimal {
                numerator,
                denominator,
            } => ratio(numerator, denominator),
            NumericLiteral::WordNumber(n) => Some(BigFraction::new(*n, 1u64)),
            NumericLiteral::Unparseable => None,
        }
    }
}

fn ratio(numerator: &BigUint, denominator: &BigUint) -> Option<BigFraction> {
    if *denominator == BigUint::from(0u32) {
        return None;
    }
    Some(BigFraction::new(numerator.clone(), denominator.clone()))
}

/// One amount string after parsing
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEntry {
    /// The amount exactly as authored (e.g., "1 1/2 cups")
    pub raw: String,

    /// Which numeric grammar matched
    pub literal: NumericLiteral,

    /// Exact quantity, absent when no usable number was found
    pub quantity: Option<BigFraction>,

    /// Canonical unit, or the lowercase raw token when no alias exists
    pub unit: Option<Unit>,

    /// Free text after the quantity and unit (e.g., "diced")
    pub remainder: String,
}

impl ParsedEntry {
    /// Build an entry from an already-known quantity and unit
    pub fn new(raw: &str, quantity: Option<BigFraction>, unit: Option<Unit>) -> Self {
        Self {
            raw: raw.to_string(),
            literal: NumericLiteral::Unparseable,
            quantity,
            unit,
            remainder: String::new(),
        }
    }

    /// Entry with no quantity and no unit; consolidation shows its raw text
    pub fn unparsed(raw: &str, remainder: &str) -> Self {
        Self {
            raw: raw.to_string(),
            literal: NumericLiteral::Unparseable,
            quantity: None,
            unit: None,
            remainder: remainder.to_string(),
        }
    }

    /// Set the recognized literal
    pub fn with_literal(mut self, literal: NumericLiteral) -> Self {
        self.literal = literal;
        self
    }

    /// Set the leftover descriptive text
    pub fn with_remainder(mut self, remainder: &str) -> Self {
        self.remainder = remainder.to_string();
        self
    }

    /// Check if this entry has a usable quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_literal_values() {
        let mixed = NumericLiteral::MixedNumber {
            whole: big(2),
            numerator: big(1),
            denominator: big(4),
        };
        assert_eq!(mixed.value(), Some(BigFraction::new(9u64, 4u64)));

        let decimal = NumericLiteral::Decimal {
            numerator: big(15),
            denominator: big(10),
        };
        assert_eq!(decimal.value(), Some(BigFraction::new(3u64, 2u64)));

        assert_eq!(
            NumericLiteral::WordNumber(3).value(),
            Some(BigFraction::new(3u64, 1u64))
        );
        assert_eq!(NumericLiteral::Unparseable.value(), None);
    }

    #[test]
    fn test_components_beyond_u64() {
        let huge: BigUint = "20000000000000000000".parse().unwrap();
        let literal = NumericLiteral::SimpleFraction {
            numerator: huge.clone(),
            denominator: big(1),
        };
        assert_eq!(literal.value(), Some(BigFraction::new(huge, 1u64)));
    }

    #[test]
    fn test_zero_denominator_has_no_value() {
        let broken = NumericLiteral::SimpleFraction {
            numerator: big(3),
            denominator: big(0),
        };
        assert_eq!(broken.value(), None);

        let broken_mixed = NumericLiteral::MixedNumber {
            whole: big(1),
            numerator: big(1),
            denominator: big(0),
        };
        assert_eq!(broken_mixed.value(), None);
    }

    #[test]
    fn test_unparsed_entry() {
        let entry = ParsedEntry::unparsed("a pinch of salt", "a pinch of salt");
        assert!(!entry.has_quantity());
        assert_eq!(entry.unit, None);
        assert_eq!(entry.literal, NumericLiteral::Unparseable);
    }
}
