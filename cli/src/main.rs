mod commands;
mod config;
mod terminal;

use std::io::{self, IsTerminal};

use commands::{CommandLine, Commands, menu, person, rectangle};
use config::Config;
use terminal::{input::Reader, logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let cfg = Config::new(&commands, interactive);

    if cfg.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(&cfg)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut reader = Reader::stdio();
            menu::run(&mut reader, &cfg)
        }
        Commands::Person {
            name,
            surname,
            age,
            n,
        } => person::one_shot(&name, &surname, &age, n.as_deref(), &cfg),
        Commands::Rectangle {
            x,
            y,
            width,
            height,
        } => rectangle::one_shot(&x, &y, &width, &height, &cfg),
    }
}
