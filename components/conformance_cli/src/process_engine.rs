//! Subprocess-backed script engine.
//!
//! Writes each assembled script to a scratch file and executes it with a
//! configurable JS shell. Exit status 0 is success; anything else, including
//! a failure to spawn, becomes a failed outcome — the engine contract
//! forbids raising past `run`.

use conformance_harness::{ExecutionOutcome, ScriptEngine};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Executes assembled scripts through an external JS shell process.
pub struct ProcessEngine {
    program: String,
    args: Vec<String>,
    scratch: TempDir,
}

impl ProcessEngine {
    /// Create an engine invoking `program` with `args` before the script
    /// path. The scratch directory lives as long as the engine.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> std::io::Result<Self> {
        Ok(Self {
            program: program.into(),
            args,
            scratch: TempDir::new()?,
        })
    }

    /// The configured shell command.
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ScriptEngine for ProcessEngine {
    fn run(&mut self, script: &str, label: &str) -> ExecutionOutcome {
        let path = self.scratch.path().join(format!("{}.js", sanitize(label)));
        if let Err(e) = fs::write(&path, script) {
            return ExecutionOutcome::failure(format!(
                "could not stage script for {}: {}",
                label, e
            ));
        }

        let output = Command::new(&self.program).args(&self.args).arg(&path).output();
        match output {
            Ok(output) if output.status.success() => ExecutionOutcome::success(),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let exception = stderr
                    .lines()
                    .find(|line| !line.trim().is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} reported failure", self.program));
                let mut outcome = ExecutionOutcome::failure(exception)
                    .with_engine_stack(output.status.to_string());
                let stack = stderr.trim();
                if !stack.is_empty() {
                    outcome = outcome.with_script_stack(stack);
                }
                outcome
            }
            Err(e) => ExecutionOutcome::failure(format!(
                "failed to spawn {}: {}",
                self.program, e
            )),
        }
    }
}

/// Flatten a path-like label into a scratch file name.
fn sanitize(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
