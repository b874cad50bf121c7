//! Diagnostic output layer
//!
//! Every message produced while generating or checking a rewrite map goes
//! through the [`Reporter`] trait, so the commands never decide on their own
//! whether something is printed. Two implementations exist:
//! - [`ConsoleReporter`]: prints everything (default)
//! - [`SilentReporter`]: used for `--silent`, drops informational output and
//!   per-record warnings but still prints errors
//!
//! Reporting never changes control flow.

use console::Style;

/// Sink for diagnostics emitted by the pipelines
pub trait Reporter {
    /// Informational progress output (echoed entries, status lines)
    fn info(&self, message: &str);

    /// A record or entry was skipped or flagged, processing continues
    fn warn(&self, message: &str);

    /// A record could not be parsed, or a pipeline stage failed
    fn error(&self, message: &str);

    /// Final outcome of a command
    fn success(&self, message: &str);
}

/// Reporter that writes to the terminal
///
/// Informational output and warnings go to stdout, errors to stderr.
#[derive(Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        println!("{}", Style::new().yellow().apply_to(message));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", Style::new().for_stderr().red().bold().apply_to(message));
    }

    fn success(&self, message: &str) {
        println!("{}", Style::new().green().apply_to(message));
    }
}

/// Reporter for `--silent` runs
///
/// Drops everything except errors, which are still written to stderr.
#[derive(Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn info(&self, _message: &str) {
        // No-op for silent mode
    }

    fn warn(&self, _message: &str) {
        // No-op for silent mode
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }

    fn success(&self, _message: &str) {
        // No-op for silent mode
    }
}

/// Pick the reporter matching the `--silent` flag
pub fn reporter_for(silent: bool) -> Box<dyn Reporter> {
    if silent {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter)
    }
}
