//! CLI argument definitions.

use clap::Parser;

/// Run an ECMAScript conformance suite against an external JS shell.
#[derive(Parser, Debug)]
#[command(
    name = "conformance-runner",
    version,
    about = "Runs a conformance-test corpus through a JavaScript shell and reports pass/fail"
)]
pub struct Cli {
    /// Corpus root containing `suite/` and `harness/` subdirectories
    pub corpus: String,

    /// JS shell command used to execute assembled scripts
    #[arg(long, default_value = "node")]
    pub engine: String,

    /// Extra argument passed to the engine before the script path (repeatable)
    #[arg(long = "engine-arg", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Disable a category (repeatable), e.g. --skip ch07 --skip intl402
    #[arg(long = "skip")]
    pub skip: Vec<String>,

    /// Walk the suite directory for tests instead of reading the manifest
    #[arg(long)]
    pub discover: bool,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub json: Option<String>,

    /// Print a progress line after every test instead of every hundredth
    #[arg(long, short)]
    pub verbose: bool,
}
