use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::info;
use valida_core::{Rectangle, service};

use crate::config::Config;
use crate::terminal::input::Reader;
use crate::terminal::{format, print};

pub fn interactive<R: BufRead, W: Write>(
    reader: &mut Reader<R, W>,
    cfg: &Config,
) -> anyhow::Result<Rectangle> {
    print::header("please, input new rectangle's data", cfg.quiet);
    let (x, y) = reader.read_coords()?;
    let (width, height) = reader.read_dimensions()?;

    let rectangle = create(&x, &y, &width, &height)?;
    info!("Rectangle successfully created!");
    show(&rectangle, cfg);
    Ok(rectangle)
}

pub fn one_shot(x: &str, y: &str, width: &str, height: &str, cfg: &Config) -> anyhow::Result<()> {
    let rectangle = create(x, y, width, height)?;
    show(&rectangle, cfg);
    Ok(())
}

fn create(x: &str, y: &str, width: &str, height: &str) -> anyhow::Result<Rectangle> {
    service::create_rectangle(x, y, width, height).context("Couldn't create the rectangle")
}

fn show(rectangle: &Rectangle, cfg: &Config) {
    print::header("new rectangle", cfg.quiet);
    print::as_tree_one_level(format::rectangle_details(rectangle));
}
