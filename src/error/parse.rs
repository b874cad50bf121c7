//! CSV, XML and URL parse errors

use std::path::Path;

use super::RewriteError;

/// Creates an XML parse failed error for the document at `path`
pub fn xml_failed(path: impl AsRef<Path>, reason: impl ToString) -> RewriteError {
    RewriteError::XmlParseFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a URL parse failed error
pub fn url_failed(input: impl Into<String>, err: &url::ParseError) -> RewriteError {
    RewriteError::UrlParseFailed {
        input: input.into(),
        reason: err.to_string(),
    }
}

/// Creates an invalid CSV record error
pub fn csv_record(line: u64, reason: impl ToString) -> RewriteError {
    RewriteError::CsvRecordInvalid {
        line,
        reason: reason.to_string(),
    }
}
