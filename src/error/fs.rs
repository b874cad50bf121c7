//! File access errors

use std::io;
use std::path::Path;

use super::RewriteError;

/// Creates a file not found error
pub fn not_found(path: impl AsRef<Path>) -> RewriteError {
    RewriteError::FileNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl AsRef<Path>, reason: impl ToString) -> RewriteError {
    RewriteError::FileReadFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl AsRef<Path>, reason: impl ToString) -> RewriteError {
    RewriteError::FileWriteFailed {
        path: path.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}

/// Maps an error from opening or reading `path`, keeping "not found" distinct
pub fn from_read(path: impl AsRef<Path>, err: &io::Error) -> RewriteError {
    if err.kind() == io::ErrorKind::NotFound {
        not_found(path)
    } else {
        read_failed(path, err)
    }
}
