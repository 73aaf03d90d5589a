// Shared test helpers for integration tests
#![allow(dead_code)]

use spectra::core::config::ReportConfig;
use spectra::core::models::SessionMetadata;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::{TempDir, tempdir};

pub fn setup_output_dir() -> TempDir {
    tempdir().expect("Failed to create temporary directory")
}

/// A quiet configuration writing its report into `dir`.
pub fn quiet_config(dir: &TempDir) -> ReportConfig {
    ReportConfig {
        output: dir.path().join("test_report.html"),
        quiet: true,
        ..ReportConfig::default()
    }
}

/// Session metadata with fixed values, for byte-for-byte comparisons.
pub fn fixed_session(title: &str) -> SessionMetadata {
    SessionMetadata {
        duration: Duration::from_millis(1500),
        exit_status: 1,
        ..SessionMetadata::new(title)
    }
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
