//! Error types and handling for iis-rewrite
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File access errors (open, read, write, truncate)
//! - [`parse`]: CSV record, XML document and URL parse errors
//!
//! Record shape errors (wrong field count, empty or repeated keys) are
//! constructed inline by the record reader.

pub mod fs;
pub mod parse;


use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a [`RewriteError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Opening, reading, writing or truncating a file failed
    FileAccess,
    /// A CSV record, XML document or URL could not be parsed
    Parse,
    /// A record does not have the shape of a redirect pair
    Shape,
    /// The command line is incomplete
    Usage,
}

/// Main error type for iis-rewrite operations
#[derive(Error, Diagnostic, Debug)]
pub enum RewriteError {
    // File access errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(iis_rewrite::fs::not_found),
        help("Check that the path is correct and the file exists")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(iis_rewrite::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(iis_rewrite::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(iis_rewrite::fs::io_error))]
    IoError { message: String },

    // Parse errors
    #[error("Error parsing line {line}: {reason}")]
    #[diagnostic(code(iis_rewrite::parse::csv_record))]
    CsvRecordInvalid { line: u64, reason: String },

    #[error("Failed to parse rewrite map XML: {path}: {reason}")]
    #[diagnostic(
        code(iis_rewrite::parse::xml),
        help("The file must be a <rewriteMaps> document with <rewriteMap> and <add> elements")
    )]
    XmlParseFailed { path: String, reason: String },

    #[error("Error parsing URL '{input}': {reason}")]
    #[diagnostic(code(iis_rewrite::parse::url))]
    UrlParseFailed { input: String, reason: String },

    // Shape errors
    #[error("Error parsing line {line}: expected 2 fields, found {found}: {record}")]
    #[diagnostic(
        code(iis_rewrite::shape::field_count),
        help("Each line must contain exactly one source and one target separated by the separator")
    )]
    FieldCountMismatch {
        line: u64,
        found: usize,
        record: String,
    },

    #[error("SKIP: Empty key on line {line} (value: {value})")]
    #[diagnostic(code(iis_rewrite::shape::empty_key))]
    EmptyKey { line: u64, value: String },

    #[error("SKIP: duplicate rewrite map item on line {line}: {key} -> {value}")]
    #[diagnostic(code(iis_rewrite::shape::duplicate_key))]
    DuplicateKey {
        line: u64,
        key: String,
        value: String,
    },

    // Usage errors
    #[error("Missing required argument: --{name}")]
    #[diagnostic(code(iis_rewrite::usage::missing_argument))]
    MissingArgument { name: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(iis_rewrite::usage::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },
}

impl RewriteError {
    /// Classify this error into one of the broad error kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            RewriteError::FileNotFound { .. }
            | RewriteError::FileReadFailed { .. }
            | RewriteError::FileWriteFailed { .. }
            | RewriteError::IoError { .. } => ErrorKind::FileAccess,
            RewriteError::CsvRecordInvalid { .. }
            | RewriteError::XmlParseFailed { .. }
            | RewriteError::UrlParseFailed { .. } => ErrorKind::Parse,
            RewriteError::FieldCountMismatch { .. }
            | RewriteError::EmptyKey { .. }
            | RewriteError::DuplicateKey { .. } => ErrorKind::Shape,
            RewriteError::MissingArgument { .. } | RewriteError::UnsupportedShell { .. } => {
                ErrorKind::Usage
            }
        }
    }
}

impl From<std::io::Error> for RewriteError {
    fn from(err: std::io::Error) -> Self {
        RewriteError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for RewriteError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        parse::csv_record(line, err)
    }
}

impl From<quick_xml::DeError> for RewriteError {
    fn from(err: quick_xml::DeError) -> Self {
        RewriteError::XmlParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RewriteError>;
