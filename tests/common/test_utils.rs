//! Test utilities for temporary files and generated columns

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static TEST_FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Get the temporary directory, respecting TMPDIR, TEMP and TMP
pub fn get_temp_dir() -> PathBuf {
    env::var("TMPDIR")
        .or_else(|_| env::var("TEMP"))
        .or_else(|_| env::var("TMP"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir())
}

/// Generate a unique test file path
pub fn test_temp_path(test_name: &str, extension: &str) -> PathBuf {
    let counter = TEST_FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let filename = format!(
        "statreport_test_{}_{}_{}.{}",
        test_name,
        std::process::id(),
        counter,
        extension
    );
    get_temp_dir().join(filename)
}

/// RAII wrapper for temporary test files, deleted on drop
pub struct TempTestFile {
    path: PathBuf,
}

impl TempTestFile {
    pub fn new(test_name: &str, extension: &str) -> Self {
        TempTestFile {
            path: test_temp_path(test_name, extension),
        }
    }

    /// Create the file with the given contents
    pub fn with_contents(test_name: &str, extension: &str, contents: &str) -> Self {
        let file = TempTestFile::new(test_name, extension);
        fs::write(file.path(), contents).expect("Failed to write test file");
        file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTestFile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Deterministic pseudo-random column (64-bit LCG), values in [low, high)
///
/// `decimals` controls how coarse the values are, so low settings produce
/// plenty of repeated values.
pub fn generated_column(seed: u64, len: usize, low: f64, high: f64, decimals: u32) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let factor = 10f64.powi(decimals as i32);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            ((low + unit * (high - low)) * factor).floor() / factor
        })
        .collect()
}
