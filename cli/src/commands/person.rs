use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use tracing::info;
use valida_core::{Person, service};

use crate::config::Config;
use crate::terminal::input::Reader;
use crate::terminal::{format, print};

pub fn interactive<R: BufRead, W: Write>(
    reader: &mut Reader<R, W>,
    cfg: &Config,
) -> anyhow::Result<String> {
    print::header("please, input new person's data", cfg.quiet);
    let input = reader.read_person_info()?;

    let person = service::create_person(&input.name, &input.surname, &input.age)
        .context("Couldn't create the person")?;
    info!("Person successfully created!");
    show(&person, cfg);

    print::header("now, input the value to check person's age", cfg.quiet);
    let n = reader.read_n()?;
    compare(&person, &n)
}

pub fn one_shot(
    name: &str,
    surname: &str,
    age: &str,
    n: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let person =
        service::create_person(name, surname, age).context("Couldn't create the person")?;
    show(&person, cfg);

    if let Some(n) = n {
        compare(&person, n)?;
    }
    Ok(())
}

fn show(person: &Person, cfg: &Config) {
    print::header("person", cfg.quiet);
    print::as_tree_one_level(format::person_details(person));
}

fn compare(person: &Person, n: &str) -> anyhow::Result<String> {
    let verdict = service::compare_age(person, n).context("Couldn't check the person's age")?;
    print::aligned_line("Result", 6, verdict.as_str().bold());
    Ok(verdict)
}
