//! Script assembly: strict-mode prologue + shared prelude + test body.
//!
//! Tests declare strictness and expected polarity by annotation substrings
//! in their source rather than by out-of-band metadata.

/// Annotation marking a test that must run under strict-mode semantics.
pub const ONLY_STRICT_MARKER: &str = "@onlyStrict";

/// Annotation marking a negative test (expected to raise an exception).
pub const NEGATIVE_MARKER: &str = "@negative";

/// Whether the raw test body declares itself strict-only.
pub fn is_only_strict(raw: &str) -> bool {
    raw.contains(ONLY_STRICT_MARKER)
}

/// Whether the raw test body is a negative test.
pub fn is_negative_test(raw: &str) -> bool {
    raw.contains(NEGATIVE_MARKER)
}

/// Strict-mode prologue for a test body.
///
/// Strict tests get a `"use strict"` directive plus `strict_mode = true`;
/// every other test still declares the flag so harness code can read it.
pub fn strict_prologue(raw: &str) -> &'static str {
    if is_only_strict(raw) {
        "\"use strict\";\nvar strict_mode = true;\n"
    } else {
        "var strict_mode = false;\n"
    }
}

/// Assemble one executable script from the shared prelude and a raw test body.
///
/// The order is load-bearing: the strict prologue must precede the prelude so
/// the directive applies to the whole unit, and the prelude must precede the
/// body so its definitions are visible to the test's closures. The body is
/// appended unmodified.
pub fn assemble(prelude: &str, raw: &str) -> String {
    let prologue = strict_prologue(raw);
    let mut script = String::with_capacity(prologue.len() + prelude.len() + raw.len());
    script.push_str(prologue);
    script.push_str(prelude);
    script.push_str(raw);
    script
}
