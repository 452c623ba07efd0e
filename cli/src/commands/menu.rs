use std::io::{self, BufRead, Write};

use tracing::error;

use crate::commands::{person, rectangle};
use crate::config::Config;
use crate::terminal::input::{self, Reader};
use crate::terminal::print;
use crate::vprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Person,
    Rectangle,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Person, MenuOption::Rectangle, MenuOption::Exit];

    pub fn key(self) -> char {
        match self {
            MenuOption::Person => '1',
            MenuOption::Rectangle => '2',
            MenuOption::Exit => '3',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Person => "Person",
            MenuOption::Rectangle => "Rectangle",
            MenuOption::Exit => "Exit",
        }
    }

    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.key() == key)
    }
}

/// Runs the menu until the user exits or input ends.
///
/// Errors raised inside a flow are printed and the menu starts over. Only
/// failures of the terminal itself end the loop with an error.
pub fn run<R: BufRead, W: Write>(reader: &mut Reader<R, W>, cfg: &Config) -> anyhow::Result<()> {
    loop {
        if cfg.interactive {
            print::clear_screen()?;
        }
        print::header("choose which part of program to check", cfg.quiet);
        for option in MenuOption::ALL {
            print::menu_option(option.key(), option.label());
        }

        let choice = match next_choice(reader, cfg) {
            Ok(choice) => choice,
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => return Err(e.into()),
        };
        vprint!();

        let outcome = match choice.and_then(MenuOption::from_key) {
            Some(MenuOption::Person) => person::interactive(reader, cfg).map(|_| ()),
            Some(MenuOption::Rectangle) => rectangle::interactive(reader, cfg).map(|_| ()),
            Some(MenuOption::Exit) => break,
            None => {
                error!("Please, choose the appropriate option.");
                Ok(())
            }
        };

        if let Err(err) = outcome {
            match err.downcast_ref::<io::Error>() {
                Some(e) if is_end_of_input(e) => break,
                Some(_) => return Err(err),
                None => print::error_chain(&err),
            }
        }

        if cfg.interactive {
            reader.wait_for_enter()?;
        }
    }

    print::fat_separator();
    print::centerln("Bye!");
    Ok(())
}

fn next_choice<R: BufRead, W: Write>(
    reader: &mut Reader<R, W>,
    cfg: &Config,
) -> io::Result<Option<char>> {
    if cfg.interactive {
        input::read_key()
    } else {
        let line = reader.read_line("> ")?;
        Ok(single_char(line.trim()))
    }
}

/// Anything but exactly one character is not a menu key.
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn is_end_of_input(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}
