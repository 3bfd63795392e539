//! Unit tests for manifest parsing and the filesystem corpus loader

use conformance_harness::{
    build_prelude, discover_tests, parse_manifest, CorpusLoader, FsCorpusLoader, HarnessError,
    HARNESS_FILES, MANIFEST_FILE,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Build a minimal corpus with all five harness files and a manifest.
fn corpus(manifest: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), &format!("suite/{}", MANIFEST_FILE), manifest);
    for name in HARNESS_FILES {
        write_file(
            dir.path(),
            &format!("harness/{}", name),
            &format!("// {}\n", name),
        );
    }
    dir
}

#[test]
fn test_parse_manifest_skips_comments_and_blanks() {
    let text = "# header comment\nch15/a.js\n\n   \nch06/b.js\n# trailing\n";
    assert_eq!(parse_manifest(text), vec!["ch15/a.js", "ch06/b.js"]);
}

#[test]
fn test_parse_manifest_preserves_order() {
    let text = "ch07/z.js\nch06/a.js\nch15/m.js\n";
    assert_eq!(
        parse_manifest(text),
        vec!["ch07/z.js", "ch06/a.js", "ch15/m.js"]
    );
}

#[test]
fn test_parse_manifest_trims_lines() {
    let text = "  ch15/a.js \r\nch06/b.js\r\n";
    assert_eq!(parse_manifest(text), vec!["ch15/a.js", "ch06/b.js"]);
}

#[test]
fn test_parse_manifest_empty_input() {
    assert!(parse_manifest("").is_empty());
    assert!(parse_manifest("# only comments\n#more\n").is_empty());
}

#[test]
fn test_load_manifest_from_suite_store() {
    let dir = corpus("ch15/a.js\n# comment\nch06/b.js\n");
    let loader = FsCorpusLoader::new(dir.path());
    let manifest = loader.load_manifest().unwrap();
    assert_eq!(manifest, vec!["ch15/a.js", "ch06/b.js"]);
}

#[test]
fn test_load_manifest_missing_is_load_error() {
    let dir = TempDir::new().unwrap();
    let loader = FsCorpusLoader::new(dir.path());
    let error = loader.load_manifest().unwrap_err();
    assert!(matches!(error, HarnessError::Load { .. }));
    assert!(error.is_fatal());
}

#[test]
fn test_build_prelude_concatenates_in_fixed_order() {
    let dir = corpus("");
    let loader = FsCorpusLoader::new(dir.path());
    let prelude = build_prelude(&loader).unwrap();

    let expected = "// cth.js\n// sta.js\n// ed.js\n// testBuiltInObject.js\n// testIntl.js\n\n";
    assert_eq!(prelude, expected);
}

#[test]
fn test_build_prelude_missing_harness_file_is_fatal() {
    let dir = corpus("");
    fs::remove_file(dir.path().join("harness/sta.js")).unwrap();
    let loader = FsCorpusLoader::new(dir.path());
    let error = build_prelude(&loader).unwrap_err();
    assert!(error.is_fatal());
    assert!(error.to_string().contains("sta.js"));
}

#[test]
fn test_load_suite_returns_raw_body() {
    let dir = corpus("ch15/a.js\n");
    write_file(dir.path(), "suite/ch15/a.js", "var x = 1;\n");
    let loader = FsCorpusLoader::new(dir.path());
    assert_eq!(loader.load_suite("ch15/a.js").unwrap(), "var x = 1;\n");
}

#[test]
fn test_load_suite_missing_is_content_not_found() {
    let dir = corpus("ch15/a.js\n");
    let loader = FsCorpusLoader::new(dir.path());
    let error = loader.load_suite("ch15/a.js").unwrap_err();
    assert!(matches!(error, HarnessError::ContentNotFound { .. }));
    assert!(!error.is_fatal());
    assert!(error.to_string().contains("ch15/a.js"));
}

#[test]
fn test_discover_tests_collects_relative_js_paths() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "suite/ch15/a.js", "");
    write_file(dir.path(), "suite/ch06/sub/b.js", "");
    write_file(dir.path(), "suite/notes.txt", "");

    let found = discover_tests(dir.path().join("suite"));
    assert_eq!(found, vec!["ch06/sub/b.js", "ch15/a.js"]);
}

#[test]
fn test_discover_tests_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "suite/ch07/c.js", "");
    write_file(dir.path(), "suite/ch07/a.js", "");

    let first = discover_tests(dir.path().join("suite"));
    let second = discover_tests(dir.path().join("suite"));
    assert_eq!(first, second);
}
