//! # Numeric Parsing
//!
//! Turns raw user text into the numeric primitives the entities expect.
//!
//! Parsing is deliberately strict:
//! * Integers are plain ASCII digits. No sign, no whitespace, no separators.
//! * Reals use `.` as the decimal separator and may carry an exponent
//!   (`1.5`, `-10`, `2e3`). Words like `inf` or `NaN` are rejected.
//!
//! A real literal that is well formed but too large for `f64` (e.g. `1e309`)
//! parses to an infinity. Rejecting it is left to the entity setters, which
//! report it as a [`crate::RangeError`].

use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;
use crate::field::Field;

/// Parses a value in `0..=65535`.
pub fn parse_small_unsigned(text: &str, field: Field) -> Result<u16, ParseError> {
    parse_digits(text, field)
}

/// Parses a value in `0..=u32::MAX`.
pub fn parse_unsigned(text: &str, field: Field) -> Result<u32, ParseError> {
    parse_digits(text, field)
}

pub fn parse_double(text: &str, field: Field) -> Result<f64, ParseError> {
    if !is_real_literal(text) {
        debug!("rejected {field} input '{text}'");
        return Err(ParseError::new(field, text));
    }

    text.parse::<f64>().map_err(|_| ParseError::new(field, text))
}

/// Parses two independent reals, failing on the first one that is invalid.
pub fn parse_pair_doubles(
    first: &str,
    second: &str,
    fields: (Field, Field),
) -> Result<(f64, f64), ParseError> {
    let a = parse_double(first, fields.0)?;
    let b = parse_double(second, fields.1)?;
    Ok((a, b))
}

pub fn parse_age(text: &str) -> Result<u16, ParseError> {
    parse_small_unsigned(text, Field::Age)
}

/// Parses the reference value a person's age is compared against.
pub fn parse_n(text: &str) -> Result<u32, ParseError> {
    parse_unsigned(text, Field::N)
}

pub fn parse_coords(x: &str, y: &str) -> Result<(f64, f64), ParseError> {
    parse_pair_doubles(x, y, (Field::Abscissa, Field::Ordinate))
}

pub fn parse_dimensions(width: &str, height: &str) -> Result<(f64, f64), ParseError> {
    parse_pair_doubles(width, height, (Field::Width, Field::Height))
}

fn parse_digits<T: FromStr>(text: &str, field: Field) -> Result<T, ParseError> {
    // `FromStr` for integers accepts a leading '+', so check the shape first.
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        debug!("rejected {field} input '{text}'");
        return Err(ParseError::new(field, text));
    }

    text.parse::<T>().map_err(|_| ParseError::new(field, text))
}

/// Shape check for `[+-]digits[.digits][(e|E)[+-]digits]`, with digits
/// required on at least one side of the point.
fn is_real_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);

    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (body, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
