//! # Quantity Formatter
//!
//! Renders exact quantities as mixed numbers ("2 1/4") and picks a display
//! unit for volume totals held in tablespoons.

use crate::units::Unit;
use fraction::BigFraction;

/// Volume totals at or above this many tablespoons are shown in cups
const CUP_THRESHOLD_TBSP: u64 = 16;
/// Volume totals below this many tablespoons are shown in teaspoons
const TBSP_THRESHOLD_TBSP: u64 = 1;
const TSP_PER_TBSP: u64 = 3;

/// Render a rational as a mixed number.
///
/// Zero renders as `"0"`. Otherwise the output is `"<whole> <n/d>"`, or just
/// the whole part, or just the fraction, with a leading `-` for negatives.
/// Fractions are always in lowest terms.
///
/// ```rust
/// use fraction::BigFraction;
/// use meal_planner::formatter::format_mixed;
///
/// assert_eq!(format_mixed(&BigFraction::new(9u64, 4u64)), "2 1/4");
/// assert_eq!(format_mixed(&BigFraction::new(6u64, 8u64)), "3/4");
/// ```
pub fn format_mixed(value: &BigFraction) -> String {
    let zero = BigFraction::new(0u64, 1u64);
    if *value == zero {
        return "0".to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let magnitude = value.abs();
    let whole = magnitude.trunc();
    let remainder = magnitude.fract();

    match (whole != zero, remainder != zero) {
        (true, true) => format!("{sign}{} {}", render_whole(&whole), render_fraction(&remainder)),
        (true, false) => format!("{sign}{}", render_whole(&whole)),
        _ => format!("{sign}{}", render_fraction(&remainder)),
    }
}

/// Render a volume total given in tablespoons.
///
/// Thresholds are checked in order: 16 tbsp and up is shown in cups, 1 tbsp
/// and up in tablespoons, anything smaller in teaspoons.
pub fn format_volume_total(total_tbsp: &BigFraction) -> String {
    let cup = BigFraction::new(CUP_THRESHOLD_TBSP, 1u64);
    let tbsp = BigFraction::new(TBSP_THRESHOLD_TBSP, 1u64);

    if *total_tbsp >= cup {
        format_amount(&(total_tbsp.clone() / cup), &Unit::Cup)
    } else if *total_tbsp >= tbsp {
        format_amount(total_tbsp, &Unit::Tbsp)
    } else {
        let tsp = total_tbsp.clone() * BigFraction::new(TSP_PER_TBSP, 1u64);
        format_amount(&tsp, &Unit::Tsp)
    }
}

/// `"<mixed number> <unit>"`
pub fn format_amount(value: &BigFraction, unit: &Unit) -> String {
    format!("{} {}", format_mixed(value), unit)
}

// Integral by construction (output of trunc)
fn render_whole(whole: &BigFraction) -> String {
    match whole.numer() {
        Some(numer) => numer.to_string(),
        None => whole.to_string(),
    }
}

// Proper fraction by construction (output of fract), so the denominator is never 1
fn render_fraction(fraction: &BigFraction) -> String {
    match (fraction.numer(), fraction.denom()) {
        (Some(numer), Some(denom)) => format!("{numer}/{denom}"),
        _ => fraction.to_string(),
    }
}
