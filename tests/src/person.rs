#![cfg(test)]
use valida_core::parser::{parse_age, parse_n, parse_small_unsigned};
use valida_core::service::{compare_age, create_person};
use valida_core::{DomainError, Error, Field, MAX_AGE, ParseError, Person, RangeError};

/// Every age the parser accepts either builds a person or is rejected by the
/// age rule, never anything else.
#[test]
fn age_text_round_trips_through_person() {
    for age in (0..=u16::MAX).step_by(13).chain([MAX_AGE, MAX_AGE + 1, u16::MAX]) {
        let result = create_person("John", "Smith", &age.to_string());
        if age <= MAX_AGE {
            let person = result.expect("age within limit");
            assert_eq!(person.age(), age);
        } else {
            assert_eq!(
                result,
                Err(Error::Domain(DomainError::InvalidAge { age, max: MAX_AGE })),
                "age {age}"
            );
        }
    }
}

#[test]
fn malformed_age_text_is_a_parse_error() {
    for input in ["1.79", "1,79", "-1", "", "   ", "10O", "1@3", "65536"] {
        assert_eq!(
            create_person("John", "Smith", input),
            Err(Error::Parse(ParseError::new(Field::Age, input))),
            "input {input:?}"
        );
        assert!(parse_small_unsigned(input, Field::Age).is_err());
    }
}

#[test]
fn names_are_capitalized_on_every_path() {
    let person = create_person("philip IV", "of spain", "54").unwrap();
    assert_eq!(person.name(), "Philip IV");
    assert_eq!(person.surname(), "Of spain");

    let mut person = Person::new("a", "b", 1).unwrap();
    person.set_name("x AE A-12").unwrap();
    assert_eq!(person.name(), "X AE A-12");
}

#[test]
fn age_comparison_end_to_end() {
    let person = create_person("AgeTestPerson", "WithAge20", "20").unwrap();

    let cases = [
        ("10", "AgeTestPerson WithAge20 is older than 10"),
        ("21", "AgeTestPerson WithAge20 is younger than 21"),
        ("20", "AgeTestPerson WithAge20's age is 20"),
    ];
    for (n, expected) in cases {
        assert_eq!(compare_age(&person, n).unwrap(), expected);
    }

    assert_eq!(
        compare_age(&person, "0"),
        Err(Error::Range(RangeError::ComparisonZero))
    );
    assert!(matches!(compare_age(&person, "1.5"), Err(Error::Parse(_))));
}

#[test]
fn n_accepts_values_beyond_age_range() {
    assert_eq!(parse_n("70000"), Ok(70000));
    assert!(parse_age("70000").is_err());
}
