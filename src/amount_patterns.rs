//! # Amount Patterns Module
//!
//! This module contains regex patterns and constants used for amount parsing.

use lazy_static::lazy_static;
use regex::Regex;

/// Leading numeric literal: mixed number, simple fraction, then decimal/integer.
/// Alternation is leftmost-first, so the order of the branches is the priority order.
pub const NUMERIC_LITERAL_PATTERN: &str = r"^(?:(?P<whole>[0-9]+)\s+(?P<mixed_num>[0-9]+)/(?P<mixed_den>[0-9]+)|(?P<frac_num>[0-9]+)/(?P<frac_den>[0-9]+)|(?P<int>[0-9]+)(?:\.(?P<digits>[0-9]+))?)";

/// English number words one through ten
pub const WORD_NUMBER_PATTERN: &str =
    r"^(?P<word>one|two|three|four|five|six|seven|eight|nine|ten)\b";

/// Unit candidate: skip parenthetical descriptors, take the next delimited token
pub const UNIT_TOKEN_PATTERN: &str = r"^(?:\([^)]*\)\s*)*(?P<unit>[^\s,;()]+)";

/// Amounts containing any of these are descriptive, not quantitative
pub const NON_QUANTITATIVE_MARKERS: [&str; 4] = ["to taste", "as needed", "optional", "for serving"];

/// Decorative fraction glyphs and their ASCII forms
pub const UNICODE_FRACTIONS: [(char, &str); 9] = [
    ('½', "1/2"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Unicode fraction slash, as in "1⁄2"
pub const FRACTION_SLASH: char = '⁄';

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref NUMERIC_LITERAL_REGEX: Regex =
        Regex::new(NUMERIC_LITERAL_PATTERN).expect("Numeric literal pattern should be valid");
    pub static ref WORD_NUMBER_REGEX: Regex =
        Regex::new(WORD_NUMBER_PATTERN).expect("Word number pattern should be valid");
    pub static ref UNIT_TOKEN_REGEX: Regex =
        Regex::new(UNIT_TOKEN_PATTERN).expect("Unit token pattern should be valid");
}
