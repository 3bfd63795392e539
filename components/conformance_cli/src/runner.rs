//! Drives a full conformance run from parsed CLI arguments.

use crate::cli::Cli;
use crate::error::{CliError, CliResult};
use crate::process_engine::ProcessEngine;
use conformance_harness::{
    discover_tests, Category, CategoryConfig, CorpusLoader, FsCorpusLoader, HarnessResult,
    RunController, RunReport, ScriptEngine,
};
use std::fs;
use std::path::PathBuf;

/// Loader that discovers tests by walking the suite directory, for corpora
/// shipped without a manifest. Harness and suite reads delegate unchanged.
struct DiscoveringLoader {
    inner: FsCorpusLoader,
}

impl DiscoveringLoader {
    fn new(inner: FsCorpusLoader) -> Self {
        Self { inner }
    }
}

impl CorpusLoader for DiscoveringLoader {
    fn load_manifest(&self) -> HarnessResult<Vec<String>> {
        Ok(discover_tests(self.inner.suite_dir()))
    }

    fn load_harness(&self, name: &str) -> HarnessResult<String> {
        self.inner.load_harness(name)
    }

    fn load_suite(&self, identifier: &str) -> HarnessResult<String> {
        self.inner.load_suite(identifier)
    }
}

/// Build the category configuration from `--skip` flags.
///
/// Starts from the all-enabled session default and disables each named
/// category; an unknown name is a usage error rather than a silent no-op.
pub fn build_config(skip: &[String]) -> CliResult<CategoryConfig> {
    let mut config = CategoryConfig::default();
    for name in skip {
        let category = Category::parse(name)
            .ok_or_else(|| CliError::Usage(format!("unknown category: {}", name)))?;
        config.disable(category);
    }
    Ok(config)
}

/// Run the whole batch described by `cli` and return the report.
pub fn run(cli: &Cli) -> CliResult<RunReport> {
    let config = build_config(&cli.skip)?;
    let engine = ProcessEngine::new(cli.engine.clone(), cli.engine_args.clone())?;
    let loader = FsCorpusLoader::new(&cli.corpus);

    let report = if cli.discover {
        drive(
            RunController::with_config(DiscoveringLoader::new(loader), engine, config),
            cli,
        )?
    } else {
        drive(RunController::with_config(loader, engine, config), cli)?
    };

    if let Some(path) = &cli.json {
        fs::write(PathBuf::from(path), report.to_json()?)?;
    }
    Ok(report)
}

fn drive<L, E>(mut controller: RunController<L, E>, cli: &Cli) -> CliResult<RunReport>
where
    L: CorpusLoader,
    E: ScriptEngine,
{
    controller.load()?;
    println!("Found {} tests", controller.total());

    let verbose = cli.verbose;
    let report = controller.run(|progress| {
        if verbose || progress.executed % 100 == 0 || progress.executed == progress.total {
            println!(
                "Ran {} of {} tests ({} failed)",
                progress.executed, progress.total, progress.failed
            );
        }
    })?;

    Ok(report)
}
