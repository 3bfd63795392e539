//! Command-line front end for the conformance harness.
//!
//! Plays the role the GUI plays for the harness proper: parses arguments,
//! builds the category configuration, drives a run through
//! `conformance_harness::RunController`, and renders progress and results.

pub mod cli;
pub mod error;
pub mod process_engine;
pub mod runner;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use process_engine::ProcessEngine;
