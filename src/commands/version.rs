//! Version command implementation

use crate::commands::generate::DEFAULT_OUTPUT;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("{}", version_line());
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Default output: {DEFAULT_OUTPUT}");

    Ok(())
}

fn version_line() -> String {
    format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
