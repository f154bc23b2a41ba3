//! # Amount Consolidation
//!
//! Merges every parsed amount listed for one ingredient into a single display
//! string. Volume units (cup, tbsp, tsp) are summed together in tablespoons,
//! other units are summed per exact unit, and anything without a usable
//! quantity falls back to its raw text.
//!
//! ## Usage
//!
//! ```rust
//! use meal_planner::consolidator::consolidate_raw;
//!
//! assert_eq!(consolidate_raw(&["2 cups", "4 tbsp"]), "2 1/4 cup");
//! assert_eq!(consolidate_raw(&["1 large egg", "2 large eggs"]), "3 large");
//! assert_eq!(consolidate_raw(&["a pinch", "a pinch"]), "a pinch");
//! ```

use crate::amount_model::ParsedEntry;
use crate::amount_parser::parse;
use crate::formatter::{format_amount, format_volume_total};
use crate::units::{to_base, Unit};
use fraction::BigFraction;
use log::trace;

const TERM_SEPARATOR: &str = " + ";

/// Consolidate parsed entries into one display amount.
///
/// Output terms come in a fixed order: the volume total, then one term per
/// non-convertible unit in encounter order, then the deduplicated raw text of
/// everything that could not be summed. An empty string means there is no
/// quantity to show.
pub fn consolidate(entries: &[ParsedEntry]) -> String {
    let mut volume_total: Option<BigFraction> = None;
    let mut unit_totals: Vec<(Unit, BigFraction)> = Vec::new();
    let mut raw_terms: Vec<&str> = Vec::new();

    for entry in entries {
        match (&entry.quantity, &entry.unit) {
            (Some(quantity), Some(unit)) if unit.is_volume_convertible() => {
                match to_base(quantity, unit) {
                    Some(tbsp) => {
                        volume_total = Some(match volume_total {
                            Some(total) => total + tbsp,
                            None => tbsp,
                        });
                    }
                    None => push_raw(&mut raw_terms, &entry.raw),
                }
            }
            (Some(quantity), Some(unit)) => {
                match unit_totals.iter_mut().find(|(seen, _)| seen == unit) {
                    Some((_, total)) => *total = total.clone() + quantity.clone(),
                    None => unit_totals.push((unit.clone(), quantity.clone())),
                }
            }
            _ => push_raw(&mut raw_terms, &entry.raw),
        }
    }

    let mut terms: Vec<String> = Vec::new();

    if let Some(total) = &volume_total {
        terms.push(format_volume_total(total));
    }

    for (unit, total) in &unit_totals {
        terms.push(format_amount(total, unit));
    }

    if !raw_terms.is_empty() {
        terms.push(raw_terms.join(TERM_SEPARATOR));
    }

    trace!(
        "Consolidated {} entries into {} terms",
        entries.len(),
        terms.len()
    );

    terms.join(TERM_SEPARATOR)
}

/// Parse each raw amount and consolidate the results
pub fn consolidate_raw<S: AsRef<str>>(amounts: &[S]) -> String {
    let entries: Vec<ParsedEntry> = amounts.iter().map(|a| parse(a.as_ref())).collect();
    consolidate(&entries)
}

/// Keep the first occurrence of each non-blank raw string
fn push_raw<'a>(raw_terms: &mut Vec<&'a str>, raw: &'a str) {
    // Whitespace-only amounts count as blank and are dropped, not just ""
    if !raw.trim().is_empty() && !raw_terms.contains(&raw) {
        raw_terms.push(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(raw: &str, numer: u64, denom: u64, unit: Unit) -> ParsedEntry {
        ParsedEntry::new(raw, Some(BigFraction::new(numer, denom)), Some(unit))
    }

    #[test]
    fn test_volume_units_sum_in_tablespoons() {
        let entries = vec![
            entry("2 cups", 2, 1, Unit::Cup),
            entry("4 tbsp", 4, 1, Unit::Tbsp),
        ];
        assert_eq!(consolidate(&entries), "2 1/4 cup");
    }

    #[test]
    fn test_same_unit_sum() {
        let entries = vec![
            entry("1 large egg", 1, 1, Unit::Large),
            entry("2 large eggs", 2, 1, Unit::Large),
        ];
        assert_eq!(consolidate(&entries), "3 large");
    }

    #[test]
    fn test_distinct_units_in_encounter_order() {
        let entries = vec![
            entry("200 g", 200, 1, Unit::G),
            entry("1 can", 1, 1, Unit::Can),
            entry("50 g", 50, 1, Unit::G),
        ];
        assert_eq!(consolidate(&entries), "250 g + 1 can");
    }

    #[test]
    fn test_raw_fallback_deduplicates() {
        let entries = vec![
            ParsedEntry::unparsed("a pinch of salt", "a pinch of salt"),
            ParsedEntry::unparsed("a pinch of salt", "a pinch of salt"),
            ParsedEntry::unparsed("to taste", "to taste"),
        ];
        assert_eq!(consolidate(&entries), "a pinch of salt + to taste");
    }

    #[test]
    fn test_quantity_without_unit_falls_back_to_raw() {
        let entries = vec![ParsedEntry::new("4", Some(BigFraction::new(4u64, 1u64)), None)];
        assert_eq!(consolidate(&entries), "4");
    }

    #[test]
    fn test_mixed_groups_fixed_order() {
        let entries = vec![
            ParsedEntry::unparsed("some", "some"),
            entry("2 cloves", 2, 1, Unit::Clove),
            entry("1 tsp", 1, 1, Unit::Tsp),
        ];
        assert_eq!(consolidate(&entries), "1 tsp + 2 clove + some");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(consolidate(&[]), "");
        assert_eq!(consolidate(&[ParsedEntry::unparsed("", "")]), "");
        assert_eq!(consolidate(&[ParsedEntry::unparsed("   ", "")]), "");
    }

    #[test]
    fn test_consolidate_raw_strings() {
        assert_eq!(consolidate_raw(&["1 cup", "2 tbsp", "3 tsp"]), "1 3/16 cup");
        assert_eq!(consolidate_raw::<&str>(&[]), "");
    }
}
