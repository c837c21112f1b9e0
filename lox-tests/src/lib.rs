//! # Lox Test Runner
//!
//! A conformance test runner for Lox interpreters. Every `.lox` script under
//! the `test` directory is run through the interpreter under test and its
//! stdout is checked against the `// expect: <value>` comments embedded in
//! the script.
//!
//! ## Architecture
//!
//! The runner is organized into several modules:
//! - `harness`: Drives a full run, one script at a time
//! - `discovery`: Recursive script discovery
//! - `expectations`: `// expect:` comment extraction
//! - `execution`: Interpreter subprocess execution
//! - `comparison`: Output normalization and positional comparison
//! - `reporting`: Pass/fail bookkeeping and the console summary
//! - `config`: Command-line configuration

pub mod comparison;
pub mod config;
pub mod discovery;
pub mod execution;
pub mod expectations;
pub mod harness;
pub mod reporting;

// Re-exports for easier access
pub use comparison::{normalize_output, OutputComparator, OutputComparison};
pub use config::TestConfig;
pub use discovery::TestDiscovery;
pub use execution::{CapturedOutput, ScriptExecutor};
pub use expectations::ExpectationParser;
pub use harness::{HarnessBuilder, LoxHarness, TestRunner};
pub use reporting::{TestReport, TestStatus};

/// Test runner errors
#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("{0}")]
    Usage(String),

    #[error("Test discovery failed: {0}")]
    Discovery(String),

    #[error("Interpreter launch failed: {0}")]
    Launch(String),

    #[error("Reading expectations failed: {0}")]
    Expectations(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
