//! # Amount Parser
//!
//! This module turns free-form amount strings from recipes into structured
//! [`ParsedEntry`] values with an exact quantity and a canonical unit.
//!
//! ## Features
//!
//! - Mixed numbers ("1 1/2"), fractions ("3/4"), decimals and integers ("1.5", "2")
//! - English number words ("one" through "ten")
//! - Unicode fraction glyphs ("½", "1¾")
//! - Parenthetical descriptors before the unit ("2 (15 oz) cans")
//! - Descriptive amounts ("to taste", "as needed") are never guessed at
//!
//! Parsing never fails: anything that cannot be read as a quantity comes back
//! with `quantity` and `unit` set to `None` so consolidation can show the raw text.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::amount_parser::parse;
//! use meal_planner::units::Unit;
//! use fraction::BigFraction;
//!
//! let entry = parse("1 1/2 cups");
//! assert_eq!(entry.quantity, Some(BigFraction::new(3u64, 2u64)));
//! assert_eq!(entry.unit, Some(Unit::Cup));
//! ```

use crate::amount_model::{NumericLiteral, ParsedEntry};
use crate::amount_patterns::{
    FRACTION_SLASH, NON_QUANTITATIVE_MARKERS, NUMERIC_LITERAL_REGEX, UNICODE_FRACTIONS,
    UNIT_TOKEN_REGEX, WORD_NUMBER_REGEX,
};
use crate::units::{normalize, Unit};
use fraction::BigUint;
use log::{debug, trace};
use regex::Captures;

/// Parse a raw amount string
pub fn parse(raw: &str) -> ParsedEntry {
    let trimmed = raw.trim();
    let folded = replace_unicode_fractions(trimmed).to_lowercase();
    let folded = folded.trim();

    if folded.is_empty() || is_non_quantitative(folded) {
        debug!("Amount '{}' is descriptive, not parsing a quantity", trimmed);
        return ParsedEntry::unparsed(raw, trimmed);
    }

    if let Some(captures) = NUMERIC_LITERAL_REGEX.captures(folded) {
        let literal = numeric_literal(&captures);
        let rest = &folded[match_end(&captures)..];
        trace!("Numeric literal {:?} in '{}', rest '{}'", literal, folded, rest);
        return entry_with_unit(raw, literal, rest);
    }

    if let Some(captures) = WORD_NUMBER_REGEX.captures(folded) {
        let literal = captures
            .name("word")
            .and_then(|m| word_value(m.as_str()))
            .map_or(NumericLiteral::Unparseable, NumericLiteral::WordNumber);
        let rest = &folded[match_end(&captures)..];
        trace!("Word number {:?} in '{}', rest '{}'", literal, folded, rest);
        return entry_with_unit(raw, literal, rest);
    }

    debug!("No quantity found in amount '{}'", trimmed);
    ParsedEntry::unparsed(raw, trimmed)
}

/// Replace decorative fraction glyphs with ASCII `n/d`.
///
/// A glyph directly after a digit gets a separating space so "1½" reads as
/// the mixed number "1 1/2".
pub fn replace_unicode_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);

    for c in text.chars() {
        if c == FRACTION_SLASH {
            out.push('/');
            continue;
        }
        match UNICODE_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => {
                if out.ends_with(|prev: char| prev.is_ascii_digit()) {
                    out.push(' ');
                }
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }

    out
}

fn is_non_quantitative(folded: &str) -> bool {
    NON_QUANTITATIVE_MARKERS
        .iter()
        .any(|marker| folded.contains(marker))
}

fn match_end(captures: &Captures) -> usize {
    captures.get(0).map_or(0, |m| m.end())
}

/// Build the tagged literal from whichever branch of the numeric pattern matched.
/// Components are arbitrary precision, so long digit runs keep their exact value.
fn numeric_literal(captures: &Captures) -> NumericLiteral {
    let number = |name: &str| {
        captures
            .name(name)
            .and_then(|m| m.as_str().parse::<BigUint>().ok())
    };

    if captures.name("whole").is_some() {
        match (number("whole"), number("mixed_num"), number("mixed_den")) {
            (Some(whole), Some(numerator), Some(denominator)) => NumericLiteral::MixedNumber {
                whole,
                numerator,
                denominator,
            },
            _ => NumericLiteral::Unparseable,
        }
    } else if captures.name("frac_num").is_some() {
        match (number("frac_num"), number("frac_den")) {
            (Some(numerator), Some(denominator)) => NumericLiteral::SimpleFraction {
                numerator,
                denominator,
            },
            _ => NumericLiteral::Unparseable,
        }
    } else {
        let int = captures.name("int").map_or("", |m| m.as_str());
        let digits = captures.name("digits").map_or("", |m| m.as_str());
        decimal_literal(int, digits)
    }
}

/// "1.25" is read as 125/100
fn decimal_literal(int: &str, digits: &str) -> NumericLiteral {
    let numerator = format!("{int}{digits}").parse::<BigUint>().ok();
    let denominator = u32::try_from(digits.len())
        .ok()
        .map(|places| BigUint::from(10u32).pow(places));

    match (numerator, denominator) {
        (Some(numerator), Some(denominator)) => NumericLiteral::Decimal {
            numerator,
            denominator,
        },
        _ => NumericLiteral::Unparseable,
    }
}

fn word_value(word: &str) -> Option<u64> {
    let value = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        _ => return None,
    };
    Some(value)
}

fn entry_with_unit(raw: &str, literal: NumericLiteral, rest: &str) -> ParsedEntry {
    let (unit, remainder) = split_unit(rest.trim());
    let quantity = literal.value();

    if quantity.is_none() {
        debug!("Numeric literal in '{}' has no usable value", raw.trim());
    }

    ParsedEntry::new(raw, quantity, unit)
        .with_literal(literal)
        .with_remainder(remainder)
}

/// Pull the unit token off the text following a numeric literal.
///
/// Returns the normalized unit (if any) and the text after it.
fn split_unit(rest: &str) -> (Option<Unit>, &str) {
    let Some(captures) = UNIT_TOKEN_REGEX.captures(rest) else {
        return (None, rest);
    };

    let token = captures
        .name("unit")
        .map_or("", |m| m.as_str())
        .trim_end_matches(|c: char| c == '.' || c == ',');
    let remainder = rest[match_end(&captures)..].trim();

    if token.is_empty() {
        (None, remainder)
    } else {
        (Some(normalize(token)), remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraction::BigFraction;

    fn frac(numer: u64, denom: u64) -> Option<BigFraction> {
        Some(BigFraction::new(numer, denom))
    }

    #[test]
    fn test_parse_mixed_number() {
        let entry = parse("1 1/2 cups");
        assert_eq!(entry.quantity, frac(3, 2));
        assert_eq!(entry.unit, Some(Unit::Cup));
        assert!(matches!(entry.literal, NumericLiteral::MixedNumber { .. }));
    }

    #[test]
    fn test_parse_simple_fraction() {
        let entry = parse("3/4 tsp");
        assert_eq!(entry.quantity, frac(3, 4));
        assert_eq!(entry.unit, Some(Unit::Tsp));
        assert!(matches!(entry.literal, NumericLiteral::SimpleFraction { .. }));
    }

    #[test]
    fn test_parse_decimal_and_integer() {
        let entry = parse("1.5 tablespoons");
        assert_eq!(entry.quantity, frac(3, 2));
        assert_eq!(entry.unit, Some(Unit::Tbsp));

        let entry = parse("2 large");
        assert_eq!(entry.quantity, frac(2, 1));
        assert_eq!(entry.unit, Some(Unit::Large));
    }

    #[test]
    fn test_parse_word_number() {
        let entry = parse("one large egg");
        assert_eq!(entry.quantity, frac(1, 1));
        assert_eq!(entry.unit, Some(Unit::Large));
        assert_eq!(entry.remainder, "egg");
        assert_eq!(entry.literal, NumericLiteral::WordNumber(1));
    }

    #[test]
    fn test_word_number_needs_word_boundary() {
        // "tenderloin" starts with "ten" but is not a number word
        let entry = parse("tenderloin strips");
        assert_eq!(entry.quantity, None);
        assert_eq!(entry.unit, None);
    }

    #[test]
    fn test_descriptive_amounts_are_not_guessed() {
        for raw in ["salt to taste", "2 tbsp, optional", "as needed", "1 lemon for serving"] {
            let entry = parse(raw);
            assert_eq!(entry.quantity, None, "quantity for '{raw}'");
            assert_eq!(entry.unit, None, "unit for '{raw}'");
            assert_eq!(entry.remainder, raw);
        }
    }

    #[test]
    fn test_unparseable_amount() {
        let entry = parse("a pinch of salt");
        assert_eq!(entry.quantity, None);
        assert_eq!(entry.unit, None);
        assert_eq!(entry.remainder, "a pinch of salt");
        assert_eq!(entry.raw, "a pinch of salt");
    }

    #[test]
    fn test_empty_amount() {
        let entry = parse("   ");
        assert_eq!(entry.quantity, None);
        assert_eq!(entry.unit, None);
        assert_eq!(entry.remainder, "");
    }

    #[test]
    fn test_zero_denominator_degrades() {
        let entry = parse("3/0 cup");
        assert_eq!(entry.quantity, None);
        assert_eq!(entry.unit, Some(Unit::Cup));

        let entry = parse("1 1/0 cups");
        assert_eq!(entry.quantity, None);
    }

    #[test]
    fn test_long_literals_keep_exact_value() {
        let entry = parse("0.33333333333333333333 cup");
        let numerator: BigUint = "33333333333333333333".parse().unwrap();
        let denominator = BigUint::from(10u32).pow(20);
        assert_eq!(entry.quantity, Some(BigFraction::new(numerator, denominator)));
        assert_eq!(entry.unit, Some(Unit::Cup));

        let entry = parse("20000000000000000000 g");
        let expected: BigUint = "20000000000000000000".parse().unwrap();
        assert_eq!(entry.quantity, Some(BigFraction::new(expected, 1u64)));
        assert_eq!(entry.unit, Some(Unit::G));

        let entry = parse("99999999999999999999999 1/2 cups");
        assert!(matches!(entry.literal, NumericLiteral::MixedNumber { .. }));
        assert!(entry.has_quantity());
    }

    #[test]
    fn test_parenthetical_descriptor_skipped() {
        let entry = parse("2 (15 oz) cans black beans");
        assert_eq!(entry.quantity, frac(2, 1));
        assert_eq!(entry.unit, Some(Unit::Can));
        assert_eq!(entry.remainder, "black beans");
    }

    #[test]
    fn test_unit_punctuation_stripped() {
        assert_eq!(parse("1 tbsp. butter").unit, Some(Unit::Tbsp));
        assert_eq!(parse("2 cloves, minced").unit, Some(Unit::Clove));
        assert_eq!(parse("2 cloves, minced").remainder, ", minced");
    }

    #[test]
    fn test_unknown_unit_kept_lowercase() {
        let entry = parse("3 Sprigs thyme");
        assert_eq!(entry.unit, Some(Unit::Other("sprigs".to_string())));
    }

    #[test]
    fn test_number_without_unit() {
        let entry = parse("4");
        assert_eq!(entry.quantity, frac(4, 1));
        assert_eq!(entry.unit, None);
    }

    #[test]
    fn test_unicode_fractions() {
        assert_eq!(replace_unicode_fractions("½ cup"), "1/2 cup");
        assert_eq!(replace_unicode_fractions("1½ cups"), "1 1/2 cups");
        assert_eq!(replace_unicode_fractions("1 ¾ tsp"), "1 3/4 tsp");
        assert_eq!(replace_unicode_fractions("1⁄3 cup"), "1/3 cup");

        assert_eq!(parse("1½ cups").quantity, frac(3, 2));
        assert_eq!(parse("⅓ cup").quantity, frac(1, 3));
    }

    #[test]
    fn test_case_folding() {
        let entry = parse("  2 CUPS Flour ");
        assert_eq!(entry.quantity, frac(2, 1));
        assert_eq!(entry.unit, Some(Unit::Cup));
        assert_eq!(entry.raw, "  2 CUPS Flour ");
    }
}
