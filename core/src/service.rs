//! # Creation Service
//!
//! Goes from the raw strings a shell collected to validated entities.
//!
//! Every numeric input is parsed before any entity is touched, so a malformed
//! number is always reported as a [`crate::ParseError`] even when other fields
//! would also have been rejected by the entity rules.

use crate::error::Error;
use crate::parser;
use crate::person::Person;
use crate::rectangle::Rectangle;

pub fn create_person(name: &str, surname: &str, age: &str) -> Result<Person, Error> {
    let age = parser::parse_age(age)?;
    Ok(Person::new(name, surname, age)?)
}

pub fn create_rectangle(x: &str, y: &str, width: &str, height: &str) -> Result<Rectangle, Error> {
    let (x, y) = parser::parse_coords(x, y)?;
    let (width, height) = parser::parse_dimensions(width, height)?;
    Rectangle::new(x, y, width, height)
}

/// Parses `n` and compares it against the person's age.
pub fn compare_age(person: &Person, n: &str) -> Result<String, Error> {
    let n = parser::parse_n(n)?;
    Ok(person.check_age(n)?)
}
