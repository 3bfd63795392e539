//! Corpus loading: manifest parsing and content retrieval.
//!
//! The corpus is a content store with two spaces: `harness/` holds the shared
//! support scripts concatenated into the prelude, and `suite/` holds one
//! resource per test identifier plus the manifest listing them.

use crate::error::{HarnessError, HarnessResult};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manifest resource name within the suite store.
pub const MANIFEST_FILE: &str = "script-files.txt";

/// Harness resources concatenated, in this order, into the shared prelude.
pub const HARNESS_FILES: &[&str] = &[
    "cth.js",
    "sta.js",
    "ed.js",
    "testBuiltInObject.js",
    "testIntl.js",
];

/// Read-only access to the test corpus.
///
/// Implementations perform I/O only; nothing here mutates the store.
pub trait CorpusLoader {
    /// Load the manifest and return the test identifiers in file order.
    fn load_manifest(&self) -> HarnessResult<Vec<String>>;

    /// Load a named harness support script.
    fn load_harness(&self, name: &str) -> HarnessResult<String>;

    /// Load the raw body of a single test.
    fn load_suite(&self, identifier: &str) -> HarnessResult<String>;
}

/// Parse manifest text into test identifiers.
///
/// Blank lines and lines starting with `#` are dropped; every other line is
/// trimmed and kept verbatim, in file order. Order matters downstream: the
/// filter and the run loop both preserve it.
pub fn parse_manifest(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Build the shared harness prelude.
///
/// Concatenates the fixed list of support scripts, in order, with a trailing
/// newline. Built once per session; every assembled test sees this exact
/// string, read-only after construction.
pub fn build_prelude<L: CorpusLoader>(loader: &L) -> HarnessResult<String> {
    let mut prelude = String::new();
    for name in HARNESS_FILES {
        prelude.push_str(&loader.load_harness(name)?);
    }
    prelude.push('\n');
    Ok(prelude)
}

/// Filesystem-backed corpus store.
///
/// Expects `harness/` and `suite/` subdirectories under `root`, with the
/// manifest at `suite/script-files.txt`.
pub struct FsCorpusLoader {
    root: PathBuf,
}

impl FsCorpusLoader {
    /// Create a loader rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Path of the suite directory.
    pub fn suite_dir(&self) -> PathBuf {
        self.root.join("suite")
    }

    fn read_resource(&self, path: &Path, resource: &str) -> HarnessResult<String> {
        fs::read_to_string(path).map_err(|source| HarnessError::Load {
            resource: resource.to_string(),
            source,
        })
    }
}

impl CorpusLoader for FsCorpusLoader {
    fn load_manifest(&self) -> HarnessResult<Vec<String>> {
        let path = self.suite_dir().join(MANIFEST_FILE);
        let text = self.read_resource(&path, MANIFEST_FILE)?;
        Ok(parse_manifest(&text))
    }

    fn load_harness(&self, name: &str) -> HarnessResult<String> {
        let path = self.root.join("harness").join(name);
        self.read_resource(&path, name)
    }

    fn load_suite(&self, identifier: &str) -> HarnessResult<String> {
        let path = self.suite_dir().join(identifier);
        fs::read_to_string(&path).map_err(|source| HarnessError::ContentNotFound {
            identifier: identifier.to_string(),
            source,
        })
    }
}

/// Discover test identifiers by walking a suite directory.
///
/// Fallback for corpora shipped without a manifest: collects every `.js`
/// file below `suite_dir` as a root-relative identifier with `/` separators,
/// sorted so repeated discovery yields the same order a manifest would fix.
pub fn discover_tests<P: AsRef<Path>>(suite_dir: P) -> Vec<String> {
    let suite_dir = suite_dir.as_ref();
    let mut identifiers: Vec<String> = WalkDir::new(suite_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "js")
                .unwrap_or(false)
        })
        .filter_map(|e| {
            e.path()
                .strip_prefix(suite_dir)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    identifiers.sort();
    identifiers
}
