//! Check command implementation
//!
//! Loads a rewrite map, reports repeated keys per map and, in fix mode,
//! writes the document back without them.

use std::path::PathBuf;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::rewrite::duplicates::{find_duplicates, remove_duplicates};
use crate::rewrite::{loader, writer};
use crate::ui::{ConsoleReporter, Reporter};

/// Resolved settings for one check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub file: PathBuf,
    /// Where the fixed document goes; `None` means report only
    pub fix_target: Option<PathBuf>,
}

impl From<CheckArgs> for CheckOptions {
    fn from(args: CheckArgs) -> Self {
        let fix_target = match args.output {
            Some(output) => Some(output),
            None if args.fix => Some(args.file.clone()),
            None => None,
        };
        Self {
            file: args.file,
            fix_target,
        }
    }
}

/// What a check run found and changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub duplicates: usize,
    pub removed: usize,
}

/// Run check command
pub fn run(args: CheckArgs) -> Result<()> {
    check(&CheckOptions::from(args), &ConsoleReporter).map(|_| ())
}

pub fn check(options: &CheckOptions, reporter: &dyn Reporter) -> Result<CheckSummary> {
    reporter.info(&format!(
        "Checking rewrite map config {} for duplicates",
        options.file.display()
    ));

    let mut document = loader::load_document(&options.file)?;

    let duplicates = find_duplicates(&document);
    for duplicate in &duplicates {
        reporter.warn(&duplicate.to_string());
    }
    reporter.info("No other duplicates found");

    let mut summary = CheckSummary {
        duplicates: duplicates.len(),
        removed: 0,
    };

    if let Some(target) = &options.fix_target {
        reporter.info("Fixing duplicates");
        summary.removed = remove_duplicates(&mut document);
        writer::write_document(target, &document)?;
        reporter.success(&format!(
            "Removed {} duplicate entries, wrote {} entries to {}",
            summary.removed,
            document.entry_count(),
            target.display()
        ));
    }

    Ok(summary)
}
