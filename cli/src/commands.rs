pub mod menu;
pub mod person;
pub mod rectangle;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "valida")]
#[command(about = "Build validated people and rectangles from console input.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Hide headers and decoration (repeat for less)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug (-v) or trace (-vv) logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Create a person and optionally compare their age with n
    #[command(alias = "p")]
    Person {
        name: String,
        surname: String,
        #[arg(allow_hyphen_values = true)]
        age: String,
        /// Value to compare the person's age with
        #[arg(short, long, allow_hyphen_values = true)]
        n: Option<String>,
    },
    /// Create a rectangle from its center and dimensions
    #[command(alias = "r")]
    Rectangle {
        #[arg(allow_hyphen_values = true)]
        x: String,
        #[arg(allow_hyphen_values = true)]
        y: String,
        #[arg(allow_hyphen_values = true)]
        width: String,
        #[arg(allow_hyphen_values = true)]
        height: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = CommandLine::try_parse_from(["valida"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.quiet, 0);
    }

    #[test]
    fn test_global_flags_with_menu() {
        let cli = CommandLine::try_parse_from(["valida", "--no-color", "-q", "menu"]).unwrap();
        assert!(cli.no_color);
        assert_eq!(cli.quiet, 1);
        assert!(!cli.no_banner);
        assert_eq!(cli.command, Some(Commands::Menu));

        let cli = CommandLine::try_parse_from(["valida", "m", "--no-color", "--no-banner"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.no_banner);
    }

    #[test]
    fn test_person_subcommand() {
        let cli = CommandLine::try_parse_from(["valida", "p", "john", "smith", "30", "-n", "25"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Person {
                name: "john".into(),
                surname: "smith".into(),
                age: "30".into(),
                n: Some("25".into()),
            })
        );
    }

    #[test]
    fn test_rectangle_accepts_negative_values() {
        let cli =
            CommandLine::try_parse_from(["valida", "-qq", "rectangle", "-10", "-2.5", "3", "4"])
                .unwrap();
        assert_eq!(cli.quiet, 2);
        assert_eq!(
            cli.command,
            Some(Commands::Rectangle {
                x: "-10".into(),
                y: "-2.5".into(),
                width: "3".into(),
                height: "4".into(),
            })
        );
    }
}
