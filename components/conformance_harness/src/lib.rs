//! ECMAScript Conformance-Test Harness
//!
//! This crate loads a manifest of standalone conformance tests, filters it by
//! category configuration, assembles each test with a shared harness prelude,
//! executes it through a pluggable script engine, and classifies the outcome
//! against the test's declared positive/negative expectation.
//!
//! The harness never executes JavaScript itself; callers supply a
//! [`ScriptEngine`] implementation and drive batches through [`RunController`].

pub mod assembler;
pub mod classifier;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod loader;
pub mod report;

pub use assembler::{assemble, is_negative_test, is_only_strict, strict_prologue};
pub use classifier::{classify, Verdict};
pub use config::{select_tests, Category, CategoryConfig};
pub use controller::{FailureRecord, RunController, RunProgress, SessionState};
pub use engine::{ExecutionOutcome, ScriptEngine};
pub use error::{HarnessError, HarnessResult};
pub use loader::{
    build_prelude, discover_tests, parse_manifest, CorpusLoader, FsCorpusLoader, HARNESS_FILES,
    MANIFEST_FILE,
};
pub use report::RunReport;
