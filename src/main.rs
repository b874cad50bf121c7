//! iis-rewrite - IIS rewrite map generator
//!
//! Converts two-column CSV redirect lists into IIS URL Rewrite Module
//! rewrite maps and checks existing maps for duplicate keys.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod rewrite;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use error::ErrorKind;
use ui::{ConsoleReporter, Reporter};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(args),
        Some(Commands::Check(args)) => commands::check::run(args),
        Some(Commands::Completions(args)) => commands::completions::run(args),
        Some(Commands::Version) => commands::version::run(),
        None => commands::generate::run(cli.generate),
    };

    if let Err(e) = result {
        ConsoleReporter.error(&format!("Error: {}", e));
        let code = match e.kind() {
            ErrorKind::Usage => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
