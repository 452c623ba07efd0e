//! # Valida Core
//!
//! Validated value objects and the text parsing that feeds them.
//!
//! ## Layout
//! * **[`parser`]**: Converts raw text into numeric primitives.
//! * **[`person`]**: The [`Person`] entity and its age comparison.
//! * **[`rectangle`]**: The [`Rectangle`] entity and its perimeter.
//! * **[`service`]**: Goes from raw strings straight to entities.
//! * **[`error`]**: Parse, domain and range failures.
//!
//! Nothing in this crate performs IO. Callers hand over strings they already
//! captured and get back either a valid entity or an error describing the
//! first field that was rejected.

pub mod error;
pub mod field;
pub mod parser;
pub mod person;
pub mod rectangle;
pub mod service;

pub use error::{DomainError, Error, ParseError, RangeError};
pub use field::Field;
pub use person::{MAX_AGE, Person};
pub use rectangle::Rectangle;
