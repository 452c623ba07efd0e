use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

pub struct PersonInput {
    pub name: String,
    pub surname: String,
    pub age: String,
}

/// Prompts on `output` and reads answers line by line from `input`.
pub struct Reader<R, W> {
    input: R,
    output: W,
}

impl Reader<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Reader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line without its line terminator.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn read_person_info(&mut self) -> io::Result<PersonInput> {
        let name = self.read_line("Name:    ")?;
        let surname = self.read_line("Surname: ")?;
        let age = self.read_line("Age:     ")?;
        Ok(PersonInput { name, surname, age })
    }

    pub fn read_n(&mut self) -> io::Result<String> {
        self.read_line("n = ")
    }

    pub fn read_coords(&mut self) -> io::Result<(String, String)> {
        writeln!(self.output, "Read coordinates (x, y):")?;
        let x = self.read_line("x = ")?;
        let y = self.read_line("y = ")?;
        Ok((x, y))
    }

    pub fn read_dimensions(&mut self) -> io::Result<(String, String)> {
        writeln!(self.output, "Read dimensions:")?;
        let width = self.read_line("Width:  ")?;
        let height = self.read_line("Height: ")?;
        Ok((width, height))
    }

    /// Blocks until the user presses Enter. End of input also returns.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        match self.read_line("Press Enter to continue: ") {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
            other => other.map(|_| ()),
        }
    }
}

/// Restores cooked mode even when reading the key fails.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Waits for a single key press in raw mode.
///
/// Returns `None` for keys that are not characters. Ctrl+C is reported as
/// [`io::ErrorKind::Interrupted`].
pub fn read_key() -> io::Result<Option<char>> {
    let _guard = RawModeGuard::enable()?;
    loop {
        let Event::Key(key_event) = event::read()? else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let is_ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if is_ctrl_c {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }

        return Ok(match key_event.code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        });
    }
}
