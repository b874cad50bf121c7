//! Record reader: delimited text to redirect pairs
//!
//! Each record must hold exactly two fields, `from` and `to`. Malformed
//! records are reported as errors, empty and repeated keys as warnings; both
//! are skipped and reading continues with the next record. The set of accepted keys lives inside a
//! single [`RecordReader`] and is dropped when the read finishes.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{self, Result, RewriteError};
use crate::rewrite::RedirectPair;
use crate::rewrite::normalize::UrlNormalizer;
use crate::ui::Reporter;

/// Default field separator
pub const DEFAULT_SEPARATOR: &str = ",";

/// How records are split and post-processed
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Field separator. Single-byte separators are read with a CSV tokenizer
    /// that honors quoting; longer separators use plain line splitting.
    pub separator: String,
    /// Optional URL normalization applied to every pair before key checks
    pub normalizer: Option<UrlNormalizer>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            normalizer: None,
        }
    }
}

/// Pairs accepted by one read plus the number of skipped records
#[derive(Debug, Default)]
pub struct ReadOutcome {
    pub pairs: Vec<RedirectPair>,
    pub skipped: usize,
}

/// Reads one source into ordered, de-duplicated redirect pairs
pub struct RecordReader<'a> {
    options: &'a ReaderOptions,
    reporter: &'a dyn Reporter,
    seen: HashSet<String>,
    outcome: ReadOutcome,
}

impl<'a> RecordReader<'a> {
    pub fn new(options: &'a ReaderOptions, reporter: &'a dyn Reporter) -> Self {
        Self {
            options,
            reporter,
            seen: HashSet::new(),
            outcome: ReadOutcome::default(),
        }
    }

    /// Consume the reader and parse every record from `source`
    pub fn read<R: Read>(mut self, source: R) -> Result<ReadOutcome> {
        match csv_delimiter(&self.options.separator) {
            Some(delimiter) => self.read_csv(source, delimiter)?,
            None => self.read_split(source)?,
        }
        Ok(self.outcome)
    }

    fn read_csv<R: Read>(&mut self, source: R, delimiter: u8) -> Result<()> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        let mut record = csv::StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(true) => {
                    let line = record.position().map_or(0, csv::Position::line);
                    let fields: Vec<&str> = record.iter().collect();
                    self.accept(line, &fields);
                }
                Ok(false) => break,
                Err(err) => {
                    if err.is_io_error() {
                        return Err(RewriteError::IoError {
                            message: err.to_string(),
                        });
                    }
                    self.reject(&RewriteError::from(err));
                }
            }
        }
        Ok(())
    }

    fn read_split<R: Read>(&mut self, mut source: R) -> Result<()> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        let content = String::from_utf8_lossy(&bytes);
        let separator = self.options.separator.clone();

        for (index, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(separator.as_str()).collect();
            self.accept(index as u64 + 1, &fields);
        }
        Ok(())
    }

    fn accept(&mut self, line: u64, fields: &[&str]) {
        if fields.len() != 2 {
            self.reject(&RewriteError::FieldCountMismatch {
                line,
                found: fields.len(),
                record: fields.join(self.options.separator.as_str()),
            });
            return;
        }

        let mut pair = RedirectPair::new(strip_quotes(fields[0]), strip_quotes(fields[1]));
        if let Some(normalizer) = &self.options.normalizer {
            pair = normalizer.normalize(pair, self.reporter);
        }

        if pair.from.is_empty() {
            self.skip(&RewriteError::EmptyKey {
                line,
                value: pair.to,
            });
            return;
        }

        if self.seen.contains(&pair.from) {
            self.skip(&RewriteError::DuplicateKey {
                line,
                key: pair.from,
                value: pair.to,
            });
            return;
        }

        self.seen.insert(pair.from.clone());
        self.reporter.info(&pair.to_string());
        self.outcome.pairs.push(pair);
    }

    /// A well-formed record that is left out of the map
    fn skip(&mut self, err: &RewriteError) {
        self.outcome.skipped += 1;
        self.reporter.warn(&err.to_string());
    }

    /// A malformed record; reported even in silent mode
    fn reject(&mut self, err: &RewriteError) {
        self.outcome.skipped += 1;
        self.reporter.error(&err.to_string());
    }
}

/// Open `path` and read it with a fresh [`RecordReader`]
pub fn read_file(
    path: &Path,
    options: &ReaderOptions,
    reporter: &dyn Reporter,
) -> Result<ReadOutcome> {
    let file = File::open(path).map_err(|e| error::fs::from_read(path, &e))?;
    RecordReader::new(options, reporter)
        .read(BufReader::new(file))
        .map_err(|e| match e {
            RewriteError::IoError { message } => error::fs::read_failed(path, message),
            other => other,
        })
}

/// The CSV tokenizer handles any single-byte separator; an empty separator
/// falls back to a comma
fn csv_delimiter(separator: &str) -> Option<u8> {
    match separator.as_bytes() {
        [] => Some(b','),
        [byte] => Some(*byte),
        _ => None,
    }
}

/// Remove one surrounding pair of double quotes
fn strip_quotes(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
}
