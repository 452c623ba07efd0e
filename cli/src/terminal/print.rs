use std::io;

use crate::terminal::colors;
use colored::*;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::{error, info};

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "valida::print";

#[macro_export]
macro_rules! vprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ VALIDA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();
    let output: String = format!("{}{}{}", sep, text, sep);

    print(&output);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    print(&header_line(msg));
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg).to_uppercase();
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    format!("{}", line)
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn menu_option(key: char, label: &str) {
    let key: String = format!("{}.", key);
    print(&format!(
        "{} {}",
        key.color(colors::ACCENT),
        label.color(colors::MENU_OPTION)
    ));
}

pub fn aligned_line(key: &str, key_width: usize, value: ColoredString) {
    print_status(aligned_text(key, key_width, value));
}

fn aligned_text(key: &str, key_width: usize, value: ColoredString) -> String {
    let whitespace: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    format!("{}{} {}", key.color(colors::PRIMARY), colon, value)
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

pub fn as_tree_one_level(key_value_pair: Vec<(String, ColoredString)>) {
    let key_width: usize = key_value_pair
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (i, (key, value)) in key_value_pair.iter().enumerate() {
        let last: bool = i + 1 == key_value_pair.len();
        let branch: ColoredString = if !last {
            "├─".bright_black()
        } else {
            "└─".bright_black()
        };
        let dots: String = ".".repeat(key_width + 1 - key.len());
        let output: String = format!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
        print(&output);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

/// Prints the error followed by every cause, one per line.
pub fn error_chain(err: &anyhow::Error) {
    for cause in err.chain() {
        error!("{}", cause.to_string().color(colors::ERROR));
    }
}

pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
