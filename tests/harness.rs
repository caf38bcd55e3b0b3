//! Test harness for lsrs integration tests

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

pub use lsrs::test_utils::TestDir;

/// Run the binary in `dir` with a fixed locale and terminal width.
pub fn run_lsrs(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_lsrs");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("LC_ALL", "C")
        .env("COLUMNS", "80")
        .env_remove("LSRS_LOG")
        .output()
        .expect("Failed to run lsrs");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Non-empty, non-header, non-total lines of the output.
pub fn entry_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|l| !l.is_empty() && !l.ends_with(':') && !l.starts_with("total: "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.txt", "content");
        assert!(file_path.exists());
    }
}
