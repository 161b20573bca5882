//! # Notation Validation
//!
//! Checks a raw notation string before it is rewritten or built.
//!
//! The accepted grammar is
//!
//! ```text
//! notation := operator* seed
//! operator := [ajsgebomdcrp] | [kt] digit*
//! seed     := [TCOID] | [PAY] digit+
//! ```
//!
//! and a parametric seed argument must be at least three.

use crate::error::NotationError;
use crate::span::Span;
use config::constants::{MAX_SEED_SIDES, MIN_SEED_SIDES};

/// Operators that never take a numeric argument.
const PLAIN_OPERATORS: &str = "ajsgebomdcrp";

/// Operators that may be followed by a numeric face selector.
const ARGUMENT_OPERATORS: &str = "kt";

/// Platonic seeds.
const FIXED_SEEDS: &str = "TCOID";

/// Seeds that require a side count.
const PARAMETRIC_SEEDS: &str = "PAY";

pub(crate) fn is_plain_operator(c: char) -> bool {
    PLAIN_OPERATORS.contains(c)
}

pub(crate) fn takes_argument(c: char) -> bool {
    ARGUMENT_OPERATORS.contains(c)
}

pub(crate) fn is_fixed_seed(c: char) -> bool {
    FIXED_SEEDS.contains(c)
}

pub(crate) fn is_parametric_seed(c: char) -> bool {
    PARAMETRIC_SEEDS.contains(c)
}

/// Returns true for every character of the notation alphabet.
///
/// # Example
///
/// ```rust
/// use conway_notation::validate::is_notation_char;
///
/// assert!(is_notation_char('k'));
/// assert!(is_notation_char('7'));
/// assert!(!is_notation_char('x'));
/// ```
pub fn is_notation_char(c: char) -> bool {
    c.is_ascii_digit()
        || is_plain_operator(c)
        || takes_argument(c)
        || is_fixed_seed(c)
        || is_parametric_seed(c)
}

/// Advances past a run of ASCII digits starting at `pos`.
pub(crate) fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Parses a run of digits as a numeric argument.
pub(crate) fn parse_number(digits: &str, span: Span) -> Result<u32, NotationError> {
    digits.parse::<u32>().map_err(|_| NotationError::NumberTooLarge {
        digits: digits.to_string(),
        span,
    })
}

/// Checks a parametric seed's side count against the configured bounds.
pub(crate) fn check_sides(sides: u32, span: Span) -> Result<u32, NotationError> {
    if sides < MIN_SEED_SIDES {
        return Err(NotationError::TooFewSides { sides, span });
    }
    if sides > MAX_SEED_SIDES {
        return Err(NotationError::TooManySides {
            sides,
            max: MAX_SEED_SIDES,
            span,
        });
    }
    Ok(sides)
}

/// Validates a raw notation string.
///
/// Rejects, in this order: characters outside the alphabet, strings that do
/// not match the grammar, and parametric seeds with fewer than three sides.
///
/// # Example
///
/// ```rust
/// use conway_notation::{validate, NotationError};
///
/// assert!(validate("k3tP5").is_ok());
/// assert!(matches!(validate("aX"), Err(NotationError::UndefinedCharacter { found: 'X', .. })));
/// assert!(matches!(validate("Ca"), Err(NotationError::IllFormed { .. })));
/// assert!(matches!(validate("P2"), Err(NotationError::TooFewSides { sides: 2, .. })));
/// ```
pub fn validate(notation: &str) -> Result<(), NotationError> {
    if notation.is_empty() {
        return Err(NotationError::Empty);
    }

    if let Some((offset, found)) = notation.char_indices().find(|(_, c)| !is_notation_char(*c)) {
        return Err(NotationError::UndefinedCharacter {
            found,
            span: Span::new(offset, offset + found.len_utf8()),
        });
    }

    // Alphabet check passed, so every character is a single byte from here on
    let bytes = notation.as_bytes();
    let ill_formed = || NotationError::IllFormed {
        notation: notation.to_string(),
    };

    let mut pos = 0;
    while pos < bytes.len() {
        let c = bytes[pos] as char;
        if is_plain_operator(c) {
            pos += 1;
        } else if takes_argument(c) {
            let start = pos + 1;
            pos = skip_digits(bytes, start);
            if pos > start {
                parse_number(&notation[start..pos], Span::new(start, pos))?;
            }
        } else {
            break;
        }
    }

    let seed = *bytes.get(pos).ok_or_else(ill_formed)? as char;
    pos += 1;

    if is_fixed_seed(seed) {
        return if pos == bytes.len() { Ok(()) } else { Err(ill_formed()) };
    }
    if !is_parametric_seed(seed) {
        return Err(ill_formed());
    }

    let end = skip_digits(bytes, pos);
    if end == pos || end != bytes.len() {
        return Err(ill_formed());
    }
    let span = Span::new(pos, end);
    let sides = parse_number(&notation[pos..end], span)?;
    check_sides(sides, span)?;
    Ok(())
}
