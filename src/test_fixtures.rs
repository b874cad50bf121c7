//! Test fixtures shared by unit tests.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{RecordingReporter, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let reporter = RecordingReporter::default();
//!     // ... run a pipeline stage with &reporter ...
//!     assert!(reporter.warnings().is_empty());
//! }
//! ```

use std::cell::RefCell;

use tempfile::TempDir;

use crate::ui::Reporter;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Reporter that keeps every message so tests can assert on diagnostics
#[derive(Default)]
pub struct RecordingReporter {
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    successes: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.borrow().clone()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }
}
