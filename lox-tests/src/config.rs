//! Configuration and settings for the test runner

use clap::Parser;
use std::path::PathBuf;

/// Directory, relative to the working directory, that holds the test scripts
pub const DEFAULT_TEST_ROOT: &str = "test";

/// File extension of Lox test scripts
pub const SCRIPT_EXTENSION: &str = "lox";

/// Configuration for the test runner
#[derive(Debug, Clone, Parser)]
#[command(name = "lox-tests")]
#[command(about = "Lox interpreter conformance test runner")]
#[command(version)]
pub struct TestConfig {
    /// Path to the interpreter executable to test
    pub interpreter: PathBuf,

    /// Root directory searched for test scripts
    #[arg(skip = PathBuf::from(DEFAULT_TEST_ROOT))]
    pub test_root: PathBuf,

    /// Extension identifying test scripts
    #[arg(skip = SCRIPT_EXTENSION.to_string())]
    pub extension: String,
}

impl TestConfig {
    /// Create a new configuration with the default test root and extension
    pub fn new(interpreter: PathBuf) -> Self {
        Self {
            interpreter,
            test_root: PathBuf::from(DEFAULT_TEST_ROOT),
            extension: SCRIPT_EXTENSION.to_string(),
        }
    }
}

/// Usage line shown when the runner is invoked with the wrong arguments
pub fn usage(program: &str) -> String {
    format!("Usage: {} <path to interpreter>", program)
}
