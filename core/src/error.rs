//! # Error Types
//!
//! Three kinds of failure can come out of this crate:
//!
//! * [`ParseError`]: the text could not be turned into a number at all.
//! * [`DomainError`]: the value is well typed but breaks an entity rule.
//! * [`RangeError`]: the value (or a value derived from it) is outside the
//!   representable range, or outside the range an operation accepts.
//!
//! [`Error`] unifies them for callers that go from raw text to entities in one
//! step (see [`crate::service`]).

use thiserror::Error;

use crate::field::Field;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Can't parse {}: '{input}'", .field.describe())]
pub struct ParseError {
    pub field: Field,
    pub input: String,
}

impl ParseError {
    pub fn new(field: Field, input: &str) -> Self {
        Self {
            field,
            input: input.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid person's name: name can't be empty")]
    EmptyName,
    #[error("Invalid person's surname: surname can't be empty")]
    EmptySurname,
    #[error("Invalid person's age {age}: age can't be more than {max}")]
    InvalidAge { age: u16, max: u16 },
    #[error("Invalid rectangle's dimension: {0} can't be zero or negative")]
    InvalidDimension(Field),
    #[error("Can't calculate perimeter: out of range value")]
    PerimeterOutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("{0} coordinate value is out of range")]
    CoordOutOfRange(Field),
    #[error("Rectangle's {0} value is out of range")]
    DimensionOutOfRange(Field),
    #[error("n value can't be zero")]
    ComparisonZero,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
