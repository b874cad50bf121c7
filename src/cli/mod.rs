//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments (also used when no subcommand is given)
//! - check: Check command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod check;
pub mod completions;
pub mod generate;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;

/// iis-rewrite - IIS rewrite map generator
///
/// Build IIS URL Rewrite maps from CSV redirect lists and check existing maps for duplicates.
#[derive(Parser, Debug)]
#[command(
    name = "iis-rewrite",
    author,
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "IIS Redirect map Generator from CSV file",
    long_about = "Generates IIS URL Rewrite Module rewrite maps (rewriteMap.config) from two-column \
                  CSV redirect lists, and checks existing rewrite maps for duplicate keys. \
                  Without a subcommand, the generate flags are accepted directly.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  iis-rewrite generate -f redirects.csv -n Redirects   \x1b[90m# Write rewriteMap.config\x1b[0m\n   \
                  iis-rewrite -f redirects.csv -n Redirects            \x1b[90m# Same as generate\x1b[0m\n   \
                  iis-rewrite check -f rewriteMap.config              \x1b[90m# Report duplicate keys\x1b[0m\n   \
                  iis-rewrite check -f rewriteMap.config --fix        \x1b[90m# Remove duplicates in place\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a rewrite map from a CSV file
    Generate(GenerateArgs),

    /// Check a rewrite map for duplicate keys
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Show version information
    #[command(hide = true)]
    Version,
}
