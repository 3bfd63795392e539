//! Run controller: drives a full batch over the filtered subset.
//!
//! The controller owns the loader, the engine, the shared prelude, and the
//! failure list, and mutates them only from its single run loop. Tests
//! execute strictly in manifest order, one at a time; there is no mid-run
//! cancellation and no reconfiguration while a batch is running.

use crate::assembler::assemble;
use crate::classifier::{classify, Verdict};
use crate::config::{select_tests, CategoryConfig};
use crate::engine::{ExecutionOutcome, ScriptEngine};
use crate::error::{HarnessError, HarnessResult};
use crate::loader::{build_prelude, CorpusLoader};
use crate::report::RunReport;
use serde::Serialize;
use std::panic::{self, AssertUnwindSafe};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created; nothing loaded yet.
    Idle,
    /// Manifest and prelude load in progress.
    Loading,
    /// Loaded and filtered; a run may start and the configuration may change.
    Ready,
    /// A batch is executing; start and configure are locked out.
    Running,
}

/// Progress snapshot emitted after each executed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunProgress {
    /// Number of tests executed so far.
    pub executed: usize,
    /// Size of the filtered subset.
    pub total: usize,
    /// Failures recorded so far.
    pub failed: usize,
}

/// A test whose verdict was fail, with everything needed to render it.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    /// Identifier of the failing test.
    pub identifier: String,
    /// Outcome returned by the engine, or synthesized for load and engine
    /// faults.
    pub outcome: ExecutionOutcome,
    /// Human-readable diagnostic for display.
    pub diagnostic: String,
}

/// Drives conformance runs: load, filter, execute, classify, aggregate.
pub struct RunController<L: CorpusLoader, E: ScriptEngine> {
    loader: L,
    engine: E,
    state: SessionState,
    config: CategoryConfig,
    manifest: Vec<String>,
    subset: Vec<String>,
    prelude: String,
    failures: Vec<FailureRecord>,
}

impl<L: CorpusLoader, E: ScriptEngine> RunController<L, E> {
    /// Create an idle controller with every category enabled.
    pub fn new(loader: L, engine: E) -> Self {
        Self::with_config(loader, engine, CategoryConfig::default())
    }

    /// Create an idle controller with an explicit category configuration.
    pub fn with_config(loader: L, engine: E, config: CategoryConfig) -> Self {
        Self {
            loader,
            engine,
            state: SessionState::Idle,
            config,
            manifest: Vec::new(),
            subset: Vec::new(),
            prelude: String::new(),
            failures: Vec::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Size of the filtered subset.
    pub fn total(&self) -> usize {
        self.subset.len()
    }

    /// The filtered subset, in manifest order.
    pub fn subset(&self) -> &[String] {
        &self.subset
    }

    /// Failures recorded by the most recent run.
    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    /// The active category configuration.
    pub fn config(&self) -> &CategoryConfig {
        &self.config
    }

    /// Load the manifest and harness prelude and compute the initial subset.
    ///
    /// Idle → Loading → Ready. The two loads are independent reads but both
    /// must complete before any test executes. A load failure is fatal to
    /// the session: the controller returns to `Idle` and no test can run.
    pub fn load(&mut self) -> HarnessResult<()> {
        if self.state != SessionState::Idle {
            return Err(HarnessError::InvalidState {
                operation: "load the corpus",
                state: self.state,
            });
        }
        self.state = SessionState::Loading;

        let manifest = self.loader.load_manifest();
        let prelude = build_prelude(&self.loader);
        match (manifest, prelude) {
            (Ok(manifest), Ok(prelude)) => {
                self.manifest = manifest;
                self.prelude = prelude;
                self.subset = select_tests(&self.manifest, &self.config);
                self.state = SessionState::Ready;
                Ok(())
            }
            (Err(error), _) | (_, Err(error)) => {
                self.state = SessionState::Idle;
                Err(error)
            }
        }
    }

    /// Replace the category configuration and recompute the subset.
    ///
    /// Permitted only in `Ready`; the manifest is unchanged, so this reruns
    /// the filter without a reload. Returns the new subset size.
    pub fn configure(&mut self, config: CategoryConfig) -> HarnessResult<usize> {
        if self.state != SessionState::Ready {
            return Err(HarnessError::InvalidState {
                operation: "change the configuration",
                state: self.state,
            });
        }
        self.config = config;
        self.subset = select_tests(&self.manifest, &self.config);
        Ok(self.subset.len())
    }

    /// Run every test in the filtered subset, in manifest order.
    ///
    /// Clears the failures of any previous run, then per test: load the raw
    /// body, assemble, execute, classify, and hand `on_progress` an updated
    /// snapshot. A missing body or an engine fault is recorded as that
    /// test's failure; the batch always runs to completion. Ready → Running
    /// → Ready.
    pub fn run<F>(&mut self, mut on_progress: F) -> HarnessResult<RunReport>
    where
        F: FnMut(&RunProgress),
    {
        if self.state != SessionState::Ready {
            return Err(HarnessError::InvalidState {
                operation: "start a run",
                state: self.state,
            });
        }
        self.state = SessionState::Running;
        self.failures.clear();

        let subset = self.subset.clone();
        let total = subset.len();
        let mut report = RunReport::new(total);

        for (index, identifier) in subset.iter().enumerate() {
            match self.execute_one(identifier) {
                None => report.record_pass(),
                Some(record) => {
                    report.record_failure(&record.identifier, &record.diagnostic);
                    self.failures.push(record);
                }
            }
            on_progress(&RunProgress {
                executed: index + 1,
                total,
                failed: self.failures.len(),
            });
        }

        self.state = SessionState::Ready;
        Ok(report)
    }

    /// Execute and classify a single test, returning its failure record if
    /// the verdict is fail.
    fn execute_one(&mut self, identifier: &str) -> Option<FailureRecord> {
        let raw = match self.loader.load_suite(identifier) {
            Ok(raw) => raw,
            Err(error) => {
                // A missing body is a single-test failure, not a batch abort.
                let diagnostic = error.to_string();
                return Some(FailureRecord {
                    identifier: identifier.to_string(),
                    outcome: ExecutionOutcome::failure(diagnostic.clone()),
                    diagnostic,
                });
            }
        };

        let script = assemble(&self.prelude, &raw);
        let outcome = self.run_contained(&script, identifier);

        match classify(&raw, &outcome) {
            Verdict::Pass => None,
            Verdict::Fail => {
                let diagnostic = if outcome.succeeded() {
                    "expected an exception but the script completed".to_string()
                } else {
                    outcome.diagnostic_text()
                };
                Some(FailureRecord {
                    identifier: identifier.to_string(),
                    outcome,
                    diagnostic,
                })
            }
        }
    }

    /// Execute through the engine with fault containment: a panicking engine
    /// becomes a failed outcome instead of aborting the batch.
    fn run_contained(&mut self, script: &str, label: &str) -> ExecutionOutcome {
        let engine = &mut self.engine;
        match panic::catch_unwind(AssertUnwindSafe(|| engine.run(script, label))) {
            Ok(outcome) => outcome,
            Err(payload) => ExecutionOutcome::failure(format!(
                "engine fault: {}",
                panic_message(payload.as_ref())
            ))
            .with_engine_stack(format!("engine panicked while running {}", label)),
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
