//! The execution-engine boundary.
//!
//! The harness does not execute JavaScript itself; it hands each assembled
//! script to a [`ScriptEngine`] and consumes the structured outcome.

use serde::{Deserialize, Serialize};

/// Result of executing one assembled script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    success: bool,
    /// Exception description, present on failure.
    exception: Option<String>,
    /// Stack trace as seen by the executing script, if available.
    script_stack: Option<String>,
    /// Stack or status information from the underlying engine, if available.
    engine_stack: Option<String>,
}

impl ExecutionOutcome {
    /// Outcome of a script that completed without raising.
    pub fn success() -> Self {
        Self {
            success: true,
            exception: None,
            script_stack: None,
            engine_stack: None,
        }
    }

    /// Outcome of a script that raised or otherwise failed.
    pub fn failure(exception: impl Into<String>) -> Self {
        Self {
            success: false,
            exception: Some(exception.into()),
            script_stack: None,
            engine_stack: None,
        }
    }

    /// Attach the script-level stack trace.
    pub fn with_script_stack(mut self, stack: impl Into<String>) -> Self {
        self.script_stack = Some(stack.into());
        self
    }

    /// Attach the engine-level stack or status line.
    pub fn with_engine_stack(mut self, stack: impl Into<String>) -> Self {
        self.engine_stack = Some(stack.into());
        self
    }

    /// Whether the script completed without raising.
    pub fn succeeded(&self) -> bool {
        self.success
    }

    /// Human-readable diagnostic combining the exception text with both
    /// stack representations, whichever are available.
    pub fn diagnostic_text(&self) -> String {
        if self.success {
            return "script completed without exception".to_string();
        }
        let mut parts: Vec<&str> = Vec::new();
        if let Some(exception) = &self.exception {
            parts.push(exception);
        }
        if let Some(stack) = &self.script_stack {
            parts.push(stack);
        }
        if let Some(stack) = &self.engine_stack {
            parts.push(stack);
        }
        if parts.is_empty() {
            "script failed with no diagnostic".to_string()
        } else {
            parts.join("\n")
        }
    }
}

/// Capability the harness requires from whatever executes scripts.
///
/// Calls are synchronous; the run controller suspends the batch until each
/// call returns. Implementations must capture internal faults and report
/// them through the outcome rather than unwinding — the controller
/// additionally converts a panic into a failed outcome so a misbehaving
/// engine cannot abort the batch.
pub trait ScriptEngine {
    /// Execute `script`. `label` identifies the test for diagnostics.
    fn run(&mut self, script: &str, label: &str) -> ExecutionOutcome;
}
