//! Generate command implementation
//!
//! Reads a CSV redirect list and writes a single-map rewrite document:
//! Record Reader → (URL Normalizer) → Map Serializer.

use std::path::PathBuf;

use crate::cli::GenerateArgs;
use crate::error::{Result, RewriteError};
use crate::rewrite::normalize::UrlNormalizer;
use crate::rewrite::reader::{self, ReaderOptions};
use crate::rewrite::{RewriteDocument, RewriteMap, writer};
use crate::ui::{Reporter, reporter_for};

/// File written when `--output` is not given
pub const DEFAULT_OUTPUT: &str = "rewriteMap.config";

/// Resolved settings for one generate run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub file: PathBuf,
    pub name: String,
    pub reader: ReaderOptions,
    pub output: PathBuf,
}

/// clap marks `--file` and `--name` as required, so the binary never hits
/// `MissingArgument`; it only guards callers that build args directly.
impl TryFrom<GenerateArgs> for GenerateOptions {
    type Error = RewriteError;

    fn try_from(args: GenerateArgs) -> Result<Self> {
        let file = args.file.ok_or_else(|| RewriteError::MissingArgument {
            name: "file".to_string(),
        })?;
        let name = args.name.ok_or_else(|| RewriteError::MissingArgument {
            name: "name".to_string(),
        })?;

        Ok(Self {
            file,
            name,
            reader: ReaderOptions {
                separator: args.separator,
                normalizer: UrlNormalizer::from_flags(args.strip_domains, args.domain_to_remove),
            },
            output: args.output,
        })
    }
}

/// What a generate run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: usize,
    pub skipped: usize,
}

/// Run generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let reporter = reporter_for(args.silent);
    let options = GenerateOptions::try_from(args)?;
    generate(&options, reporter.as_ref()).map(|_| ())
}

/// Read the source, build the map and write it out
///
/// The output file is only touched once the source has been read, so a
/// missing input never truncates an existing map.
pub fn generate(options: &GenerateOptions, reporter: &dyn Reporter) -> Result<GenerateSummary> {
    reporter.info(&format!(
        "Generating rewrite map from {} named {}",
        options.file.display(),
        options.name
    ));

    let outcome = reader::read_file(&options.file, &options.reader, reporter)?;
    let summary = GenerateSummary {
        written: outcome.pairs.len(),
        skipped: outcome.skipped,
    };

    let document = RewriteDocument::single(RewriteMap::new(options.name.clone(), outcome.pairs));
    writer::write_document(&options.output, &document)?;

    reporter.success(&format!(
        "Wrote {} entries to {} ({} skipped)",
        summary.written,
        options.output.display(),
        summary.skipped
    ));

    Ok(summary)
}
