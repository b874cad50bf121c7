//! Common test utilities for iis-rewrite integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary working directory the binary runs in
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Copy a file from `tests/common/fixtures` into the workspace
    pub fn copy_fixture(&self, fixture_name: &str, target_name: &str) -> PathBuf {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join(fixture_name);
        let target_path = self.path.join(target_name);
        std::fs::copy(&fixture_path, &target_path).expect("Failed to copy fixture");
        target_path
    }

    /// Command for the real binary, running inside this workspace
    pub fn cmd(&self) -> Command {
        let mut cmd = iis_rewrite_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn iis_rewrite_cmd() -> Command {
    Command::cargo_bin("iis-rewrite").expect("binary should be built")
}
