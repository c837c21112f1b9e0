//! Interpreter subprocess execution

use log::debug;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command as TokioCommand;

use crate::TestError;

/// Output captured from one interpreter run
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Everything the interpreter wrote to stdout
    pub stdout: String,
    /// How the interpreter exited. Not used for classification.
    pub status: ExitStatus,
}

/// Runs scripts through the interpreter under test
#[derive(Debug, Clone)]
pub struct ScriptExecutor {
    interpreter: PathBuf,
}

impl ScriptExecutor {
    /// Create a new executor for the given interpreter binary
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self { interpreter: interpreter.into() }
    }

    /// Run `<interpreter> <script>` and wait for it to exit.
    ///
    /// The script path is passed as a single argument, never through a shell.
    /// Only stdout is captured; the interpreter's stderr goes straight to the
    /// console. Failing to spawn the child is fatal for the whole run.
    pub async fn run_script(&self, script: &Path) -> Result<CapturedOutput, TestError> {
        debug!("Spawning {} {}", self.interpreter.display(), script.display());

        let child = TokioCommand::new(&self.interpreter)
            .arg(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                TestError::Launch(format!(
                    "Failed to spawn {} for {}: {}",
                    self.interpreter.display(),
                    script.display(),
                    e
                ))
            })?;

        let output = child.wait_with_output().await.map_err(|e| {
            TestError::Launch(format!(
                "Failed to collect output of {} for {}: {}",
                self.interpreter.display(),
                script.display(),
                e
            ))
        })?;

        let captured = CapturedOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            status: output.status,
        };

        debug!("{} exited with {}", script.display(), captured.status);

        Ok(captured)
    }
}
