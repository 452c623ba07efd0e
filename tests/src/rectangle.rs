#![cfg(test)]
use valida_core::parser::{parse_coords, parse_dimensions};
use valida_core::service::create_rectangle;
use valida_core::{DomainError, Error, Field, RangeError, Rectangle};

#[test]
fn rectangles_compare_field_for_field() {
    let a = create_rectangle("0", "0", "2", "3").unwrap();
    let b = Rectangle::new(0.0, 0.0, 2.0, 3.0).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Rectangle::new(0.0, 0.0, 3.0, 2.0).unwrap());
}

#[test]
fn non_positive_dimensions_are_domain_errors() {
    for (width, height, field) in [
        ("-10", "10", Field::Width),
        ("0", "10", Field::Width),
        ("10", "0", Field::Height),
        ("10", "-0.001", Field::Height),
    ] {
        assert_eq!(
            create_rectangle("0", "0", width, height),
            Err(Error::Domain(DomainError::InvalidDimension(field))),
            "{width} x {height}"
        );
    }
}

#[test]
fn overflowing_literals_are_range_errors() {
    assert_eq!(
        create_rectangle("1e309", "0", "1", "1"),
        Err(Error::Range(RangeError::CoordOutOfRange(Field::Abscissa)))
    );
    assert_eq!(
        create_rectangle("0", "-1e309", "1", "1"),
        Err(Error::Range(RangeError::CoordOutOfRange(Field::Ordinate)))
    );
    assert_eq!(
        create_rectangle("0", "0", "1e309", "1"),
        Err(Error::Range(RangeError::DimensionOutOfRange(Field::Width)))
    );
}

#[test]
fn parsing_fails_before_validation() {
    // The coordinate is fine but the width is not a number, so the negative
    // height is never looked at.
    assert!(matches!(
        create_rectangle("0", "0", "1,5", "-1"),
        Err(Error::Parse(ref e)) if e.field == Field::Width
    ));
    assert_eq!(parse_coords("Abscissa", "Ordinate").unwrap_err().field, Field::Abscissa);
    assert_eq!(parse_dimensions("1", "Height").unwrap_err().field, Field::Height);
}

#[test]
fn perimeter_values() {
    let rectangle = create_rectangle("5", "-5", "100", "200").unwrap();
    assert_eq!(rectangle.perimeter(), Ok(600.0));

    assert_eq!(Rectangle::default().perimeter(), Ok(0.0));

    let huge = create_rectangle("0", "0", "1.7976931348623157E+308", "1").unwrap();
    assert_eq!(huge.perimeter(), Err(DomainError::PerimeterOutOfRange));
}
