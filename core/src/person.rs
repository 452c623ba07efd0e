//! # Person Entity
//!
//! A named person with a bounded age.
//!
//! Name and surname must contain at least one non-whitespace character and are
//! stored with their first character upper-cased. Age is capped at [`MAX_AGE`].

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{DomainError, RangeError};

pub const MAX_AGE: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    surname: String,
    age: u16,
}

impl Person {
    /// Validates every field before building the value, so a rejected field
    /// never leaves a half-built person behind. Fields are checked in the
    /// order name, surname, age.
    pub fn new(name: &str, surname: &str, age: u16) -> Result<Self, DomainError> {
        let name = capitalize(name, DomainError::EmptyName)?;
        let surname = capitalize(surname, DomainError::EmptySurname)?;
        let age = check_age_limit(age)?;

        debug!("created person {name} {surname}, age {age}");
        Ok(Self { name, surname, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = capitalize(name, DomainError::EmptyName)?;
        Ok(())
    }

    pub fn set_surname(&mut self, surname: &str) -> Result<(), DomainError> {
        self.surname = capitalize(surname, DomainError::EmptySurname)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: u16) -> Result<(), DomainError> {
        self.age = check_age_limit(age)?;
        Ok(())
    }

    /// Describes how this person's age relates to `n`.
    ///
    /// Zero is rejected as a reference value.
    pub fn check_age(&self, n: u32) -> Result<String, RangeError> {
        if n == 0 {
            return Err(RangeError::ComparisonZero);
        }

        let description = match u32::from(self.age).cmp(&n) {
            Ordering::Greater => format!("{} {} is older than {n}", self.name, self.surname),
            Ordering::Less => format!("{} {} is younger than {n}", self.name, self.surname),
            Ordering::Equal => format!("{} {}'s age is {n}", self.name, self.surname),
        };
        Ok(description)
    }
}

fn capitalize(value: &str, empty: DomainError) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        debug!("rejected blank name component");
        return Err(empty);
    }

    let mut chars = value.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    Ok(capitalized)
}

fn check_age_limit(age: u16) -> Result<u16, DomainError> {
    if age > MAX_AGE {
        debug!("rejected age {age}");
        return Err(DomainError::InvalidAge { age, max: MAX_AGE });
    }
    Ok(age)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
