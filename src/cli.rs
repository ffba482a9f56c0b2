use clap::{Parser, Subcommand};

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default settings.toml
    PrintDefaultConfig,
    Version,
}

/// Parses cli arguments.
///
/// Exits the process if the arguments are invalid (Clap does this), or after running
/// a command. Returns only when no command was given, meaning the TUI should start.
///
/// Commands are not prefixed with dashes (`songbook version`, not `songbook --version`).
pub fn cli() {
    let args = Args::parse();

    if let Some(command) = args.command {
        match command {
            Command::PrintDefaultConfig => {
                println!("# default Songbook configuration (~/.config/songbook/settings.toml):");
                println!("{}", Settings::default());
            }
            Command::Version => {
                println!("Songbook {}", env!("CARGO_PKG_VERSION"));
            }
        }
        std::process::exit(0);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args() {
        Args::command().debug_assert();

        let args = Args::try_parse_from(["songbook", "print-default-config"]).unwrap();
        assert!(matches!(args.command, Some(Command::PrintDefaultConfig)));

        let args = Args::try_parse_from(["songbook"]).unwrap();
        assert!(args.command.is_none());

        assert!(Args::try_parse_from(["songbook", "play"]).is_err());
    }
}
