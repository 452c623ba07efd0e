//! # Rectangle Entity
//!
//! An axis-aligned rectangle described by its center `(x, y)` and its
//! dimensions.
//!
//! Coordinates may take any finite value. Width and height must be strictly
//! positive and finite once assigned through a setter.

use tracing::debug;

use crate::error::{DomainError, Error, RangeError};
use crate::field::Field;

/// `Default` yields a zero-sized rectangle at the origin. Its dimensions never
/// went through the setters, so it is the only way to hold a zero width.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Applies `x`, `y`, `width`, `height` in that order and stops at the first
    /// rejected value.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, Error> {
        let mut rectangle = Self::default();
        rectangle.set_x(x)?;
        rectangle.set_y(y)?;
        rectangle.set_width(width)?;
        rectangle.set_height(height)?;

        debug!("created rectangle at ({x};{y}) sized {width}x{height}");
        Ok(rectangle)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_x(&mut self, x: f64) -> Result<(), RangeError> {
        self.x = coordinate(x, Field::Abscissa)?;
        Ok(())
    }

    pub fn set_y(&mut self, y: f64) -> Result<(), RangeError> {
        self.y = coordinate(y, Field::Ordinate)?;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), Error> {
        self.width = dimension(width, Field::Width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: f64) -> Result<(), Error> {
        self.height = dimension(height, Field::Height)?;
        Ok(())
    }

    /// Returns `2 * (width + height)`.
    ///
    /// A default rectangle reports 0 instead of failing even though its
    /// dimensions are not valid. Callers relying on a positive perimeter must
    /// build the rectangle through [`Rectangle::new`].
    pub fn perimeter(&self) -> Result<f64, DomainError> {
        let perimeter = 2.0 * (self.width + self.height);
        if !perimeter.is_finite() {
            return Err(DomainError::PerimeterOutOfRange);
        }
        Ok(perimeter)
    }
}

fn coordinate(value: f64, field: Field) -> Result<f64, RangeError> {
    if !value.is_finite() {
        debug!("rejected {field} coordinate {value}");
        return Err(RangeError::CoordOutOfRange(field));
    }
    Ok(value)
}

fn dimension(value: f64, field: Field) -> Result<f64, Error> {
    if value <= 0.0 {
        debug!("rejected {field} {value}");
        return Err(DomainError::InvalidDimension(field).into());
    }
    // NaN falls through the first check and lands here.
    if !value.is_finite() {
        debug!("rejected {field} {value}");
        return Err(RangeError::DimensionOutOfRange(field).into());
    }
    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let rectangle = Rectangle::new(0.0, 0.0, 2.0, 3.0).unwrap();
        assert_eq!(rectangle.x(), 0.0);
        assert_eq!(rectangle.y(), 0.0);
        assert_eq!(rectangle.width(), 2.0);
        assert_eq!(rectangle.height(), 3.0);
        assert_eq!(rectangle, Rectangle::new(0.0, 0.0, 2.0, 3.0).unwrap());
    }

    #[test]
    fn test_new_rejects_non_positive_dimensions() {
        assert_eq!(
            Rectangle::new(0.0, 0.0, -10.0, 10.0),
            Err(Error::Domain(DomainError::InvalidDimension(Field::Width)))
        );
        assert_eq!(
            Rectangle::new(0.0, 0.0, 0.0, 10.0),
            Err(Error::Domain(DomainError::InvalidDimension(Field::Width)))
        );
        assert_eq!(
            Rectangle::new(0.0, 0.0, 10.0, -0.0),
            Err(Error::Domain(DomainError::InvalidDimension(Field::Height)))
        );
        assert_eq!(
            Rectangle::new(0.0, 0.0, f64::NEG_INFINITY, 10.0),
            Err(Error::Domain(DomainError::InvalidDimension(Field::Width)))
        );
    }

    #[test]
    fn test_new_rejects_out_of_range_values() {
        assert_eq!(
            Rectangle::new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(Error::Range(RangeError::DimensionOutOfRange(Field::Width)))
        );
        assert_eq!(
            Rectangle::new(0.0, 0.0, 1.0, f64::NAN),
            Err(Error::Range(RangeError::DimensionOutOfRange(Field::Height)))
        );
        assert_eq!(
            Rectangle::new(f64::INFINITY, 0.0, 1.0, 1.0),
            Err(Error::Range(RangeError::CoordOutOfRange(Field::Abscissa)))
        );
        assert_eq!(
            Rectangle::new(0.0, f64::NEG_INFINITY, 1.0, 1.0),
            Err(Error::Range(RangeError::CoordOutOfRange(Field::Ordinate)))
        );
    }

    #[test]
    fn test_coordinates_accept_extremes() {
        let rectangle = Rectangle::new(f64::MAX, f64::MIN, 1.0, 1.0).unwrap();
        assert_eq!(rectangle.x(), f64::MAX);
        assert_eq!(rectangle.y(), f64::MIN);
    }

    #[test]
    fn test_failed_setter_keeps_previous_value() {
        let mut rectangle = Rectangle::new(1.0, 2.0, 3.0, 4.0).unwrap();
        assert!(rectangle.set_width(0.0).is_err());
        assert!(rectangle.set_height(f64::INFINITY).is_err());
        assert!(rectangle.set_x(f64::NAN).is_err());
        assert_eq!(rectangle, Rectangle::new(1.0, 2.0, 3.0, 4.0).unwrap());
    }

    #[test]
    fn test_perimeter() {
        let rectangle = Rectangle::new(0.0, 0.0, 100.0, 200.0).unwrap();
        assert_eq!(rectangle.perimeter(), Ok(600.0));

        let rectangle = Rectangle::new(-5.0, 5.0, 0.5, 0.25).unwrap();
        assert_eq!(rectangle.perimeter(), Ok(1.5));
    }

    #[test]
    fn test_perimeter_overflow() {
        let rectangle = Rectangle::new(0.0, 0.0, f64::MAX, f64::MAX).unwrap();
        assert_eq!(rectangle.perimeter(), Err(DomainError::PerimeterOutOfRange));
    }

    #[test]
    fn test_default_perimeter_is_zero() {
        assert_eq!(Rectangle::default().perimeter(), Ok(0.0));
    }
}
