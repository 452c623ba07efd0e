use crate::terminal::colors;
use colored::*;
use valida_core::{Person, Rectangle};

pub type Detail = (String, ColoredString);

pub fn person_details(person: &Person) -> Vec<Detail> {
    vec![
        (String::from("Name"), person.name().normal()),
        (String::from("Surname"), person.surname().normal()),
        (String::from("Age"), person.age().to_string().normal()),
    ]
}

pub fn rectangle_details(rectangle: &Rectangle) -> Vec<Detail> {
    let perimeter: ColoredString = match rectangle.perimeter() {
        Ok(perimeter) => perimeter.to_string().bold(),
        Err(err) => err.to_string().color(colors::ERROR),
    };

    vec![
        (
            String::from("Center"),
            format!("({};{})", rectangle.x(), rectangle.y()).normal(),
        ),
        (String::from("Width"), rectangle.width().to_string().normal()),
        (String::from("Height"), rectangle.height().to_string().normal()),
        (String::from("Perimeter"), perimeter),
    ]
}
