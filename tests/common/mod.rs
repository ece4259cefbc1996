//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Temporary file management
//! - Deterministic test data generation

#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{generated_column, get_temp_dir, test_temp_path, TempTestFile};
