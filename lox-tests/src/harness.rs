//! Main test harness orchestrating a run

use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::comparison::{normalize_output, OutputComparator};
use crate::config::TestConfig;
use crate::discovery::TestDiscovery;
use crate::execution::ScriptExecutor;
use crate::expectations::ExpectationParser;
use crate::reporting::{print_progress, TestReport, TestStatus};
use crate::TestError;

/// Main test harness for running Lox scripts
pub struct LoxHarness {
    config: TestConfig,
    discovery: TestDiscovery,
    parser: ExpectationParser,
    executor: ScriptExecutor,
    comparator: OutputComparator,
}

impl LoxHarness {
    /// Create a new harness
    pub fn new(config: TestConfig) -> Result<Self, TestError> {
        let discovery = TestDiscovery::with_extension(config.extension.clone());
        let parser = ExpectationParser::new()?;
        let executor = ScriptExecutor::new(config.interpreter.clone());

        Ok(Self { config, discovery, parser, executor, comparator: OutputComparator::new() })
    }

    /// Discover every script and run them one after another.
    ///
    /// Discovery and launch failures abort the run. Everything else ends up
    /// in the report.
    pub async fn run_all_tests(&self) -> Result<TestReport, TestError> {
        info!("Searching {} for test scripts", self.config.test_root.display());
        let scripts = self.discovery.discover_scripts(&self.config.test_root)?;

        let mut report = TestReport::new();
        for script in scripts {
            print_progress(&script);
            let status = self.run_script(&script).await?;
            report.record(script, status);
        }

        info!(
            "Ran {} scripts: {} passed, {} failed",
            report.total(),
            report.passed().len(),
            report.failed().len()
        );
        Ok(report)
    }

    /// Run one script and classify it
    pub async fn run_script(&self, script: &Path) -> Result<TestStatus, TestError> {
        let output = self.executor.run_script(script).await?;

        let expected = match self.parser.parse_file(script) {
            Ok(expected) => expected,
            Err(e) => {
                warn!("{}", e);
                return Ok(TestStatus::Failed);
            }
        };

        let actual = normalize_output(&output.stdout);
        let comparison = self.comparator.compare(&expected, &actual);

        match comparison.describe() {
            Some(difference) => {
                debug!("{} failed: {}", script.display(), difference);
                Ok(TestStatus::Failed)
            }
            None => Ok(TestStatus::Passed),
        }
    }
}

/// Test runner trait for synchronous callers
pub trait TestRunner {
    /// Run tests and return results
    fn run_tests(&self) -> Result<TestReport, TestError>;
}

impl TestRunner for LoxHarness {
    fn run_tests(&self) -> Result<TestReport, TestError> {
        // Scripts run strictly one at a time, so a single-threaded runtime is enough
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TestError::Config(format!("Failed to create async runtime: {}", e)))?;

        rt.block_on(self.run_all_tests())
    }
}

/// Builder pattern for creating test harnesses
pub struct HarnessBuilder {
    config: TestConfig,
}

impl HarnessBuilder {
    /// Start building a harness for the given interpreter
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self { config: TestConfig::new(interpreter.into()) }
    }

    /// Set the directory searched for scripts
    pub fn test_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.test_root = root.into();
        self
    }

    /// Build the harness
    pub fn build(self) -> Result<LoxHarness, TestError> {
        LoxHarness::new(self.config)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // `sh` stands in for the interpreter: scripts are shell with Lox-style markers.
    fn write(root: &Path, name: &str, body: &str) -> PathBuf {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    fn harness(root: &Path) -> LoxHarness {
        HarnessBuilder::new("sh").test_root(root).build().unwrap()
    }

    #[tokio::test]
    async fn test_matching_output_passes() {
        let dir = TempDir::new().unwrap();
        let script = write(dir.path(), "a.lox", "echo 2 # // expect: 2\n");

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn test_missing_line_fails() {
        let dir = TempDir::new().unwrap();
        let script = write(dir.path(), "b.lox", "echo 3 # // expect: 3\n# // expect: 4\n");

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Failed);
    }

    #[tokio::test]
    async fn test_blank_and_padded_lines_are_ignored() {
        let dir = TempDir::new().unwrap();
        let script = write(
            dir.path(),
            "a.lox",
            "echo 'one  '\necho\nprintf 'two\\t\\r\\n'\n# // expect: one\n# // expect: two   \n",
        );

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn test_reordered_expectations_fail() {
        let dir = TempDir::new().unwrap();
        let script = write(dir.path(), "a.lox", "echo 1\necho 2\n# // expect: 2\n# // expect: 1\n");

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Failed);
    }

    #[tokio::test]
    async fn test_crashing_interpreter_with_matching_output_passes() {
        let dir = TempDir::new().unwrap();
        let script = write(dir.path(), "a.lox", "echo 1 # // expect: 1\nexit 65\n");

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn test_script_with_invalid_utf8_comment_passes() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("a.lox");
        fs::write(&script, b"echo 1 # // expect: 1\n# caf\xe9\n").unwrap();

        let status = harness(dir.path()).run_script(&script).await.unwrap();
        assert_eq!(status, TestStatus::Passed);
    }

    #[tokio::test]
    async fn test_unreadable_script_fails_without_aborting() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone.lox");

        let status = harness(dir.path()).run_script(&missing).await.unwrap();
        assert_eq!(status, TestStatus::Failed);
    }

    #[tokio::test]
    async fn test_run_all_collects_results() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.lox", "echo 2 # // expect: 2\n");
        write(dir.path(), "nested/b.lox", "echo 3 # // expect: 3\n# // expect: 4\n");
        write(dir.path(), "nested/readme.md", "# // expect: never run\n");

        let report = harness(dir.path()).run_all_tests().await.unwrap();
        assert_eq!(report.passed(), &[dir.path().join("a.lox")]);
        assert_eq!(report.failed(), &[dir.path().join("nested/b.lox")]);
        assert_eq!(report.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_missing_root_aborts_run() {
        let dir = TempDir::new().unwrap();
        let err = harness(&dir.path().join("test")).run_all_tests().await.unwrap_err();
        assert!(matches!(err, TestError::Discovery(_)));
    }

    #[tokio::test]
    async fn test_broken_interpreter_aborts_run() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.lox", "echo 2 # // expect: 2\n");
        let harness = HarnessBuilder::new(dir.path().join("missing-interpreter"))
            .test_root(dir.path())
            .build()
            .unwrap();

        let err = harness.run_all_tests().await.unwrap_err();
        assert!(matches!(err, TestError::Launch(_)));
    }

    #[test]
    fn test_synchronous_runner_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.lox", "echo 2 # // expect: 2\n");
        write(dir.path(), "b.lox", "echo 5 # // expect: 4\n");
        let harness = harness(dir.path());

        let first = harness.run_tests().unwrap();
        let second = harness.run_tests().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.passed().len(), 1);
        assert_eq!(first.failed().len(), 1);
    }
}
