use crate::commands::CommandLine;

pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Each level hides more decoration and raises the log level to `warn`.
    /// Results and errors are always shown.
    pub quiet: u8,
    pub verbose: u8,
    pub no_color: bool,
    /// Single key menu selection and screen clearing.
    ///
    /// Off when stdin or stdout is not a terminal, in which case the menu reads
    /// its choice from a whole line instead.
    pub interactive: bool,
}

impl Config {
    pub fn new(commands: &CommandLine, interactive: bool) -> Self {
        Self {
            no_banner: commands.no_banner,
            quiet: commands.quiet,
            verbose: commands.verbose,
            no_color: commands.no_color,
            interactive,
        }
    }

    /// Default log level before `RUST_LOG` is applied.
    pub fn log_level(&self) -> &'static str {
        match (self.verbose, self.quiet) {
            (0, 0) => "info",
            (0, _) => "warn",
            (1, _) => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        no_banner: true,
        quiet: 0,
        verbose: 0,
        no_color: true,
        interactive: false,
    }
}
