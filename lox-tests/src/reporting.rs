//! Test result reporting

use console::style;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Outcome of running one script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    /// Output matched every expectation
    Passed,
    /// Output differed, or the script could not be read
    Failed,
}

/// Pass/fail record of a whole run.
///
/// Scripts are appended in the order they were run and never reclassified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    passed: Vec<PathBuf>,
    failed: Vec<PathBuf>,
}

impl TestReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one script
    pub fn record(&mut self, script: impl Into<PathBuf>, status: TestStatus) {
        match status {
            TestStatus::Passed => self.passed.push(script.into()),
            TestStatus::Failed => self.failed.push(script.into()),
        }
    }

    /// Scripts that passed, in run order
    pub fn passed(&self) -> &[PathBuf] {
        &self.passed
    }

    /// Scripts that failed, in run order
    pub fn failed(&self) -> &[PathBuf] {
        &self.failed
    }

    /// Total number of scripts recorded
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }

    /// Check if all tests passed. Vacuously true for an empty run.
    pub fn all_passed(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit status for this run
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Write the colored summary: passed paths, failed paths, then totals
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for path in &self.passed {
            writeln!(out, "{}", style(format!("✓ {}", path.display())).bold().green())?;
        }

        for path in &self.failed {
            writeln!(out, "{}", style(format!("✗ {}", path.display())).bold().red())?;
        }

        writeln!(out)?;
        writeln!(out, "{}", style(format!("Passed: {}", self.passed.len())).bold().green())?;
        writeln!(out, "{}", style(format!("Failed: {}", self.failed.len())).bold().red())?;
        Ok(())
    }

    /// Print the summary to stdout
    pub fn print_summary(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_summary(&mut handle)?;
        handle.flush()
    }
}

/// Announce a script before it runs
pub fn print_progress(script: &Path) {
    println!("Testing {}", script.display());
}
