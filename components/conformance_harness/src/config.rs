//! Category configuration and test selection.
//!
//! A test identifier's first path segment names its category. The
//! configuration is an explicit value object handed to the filter at call
//! time; the caller owns its lifecycle and passes a fresh snapshot whenever
//! the selection needs recomputing.

use std::collections::HashMap;
use std::fmt;

/// Top-level grouping of a test identifier. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Annex B extensions
    AnnexB,
    /// Best-practice tests outside the normative suite
    BestPractice,
    /// Chapter 6: source text
    Ch06,
    /// Chapter 7: lexical conventions
    Ch07,
    /// Chapter 8: types
    Ch08,
    /// Chapter 9: type conversion
    Ch09,
    /// Chapter 10: executable code and execution contexts
    Ch10,
    /// Chapter 11: expressions
    Ch11,
    /// Chapter 12: statements
    Ch12,
    /// Chapter 13: function definition
    Ch13,
    /// Chapter 14: program
    Ch14,
    /// Chapter 15: standard built-in objects
    Ch15,
    /// ECMA-402 internationalization tests
    Intl402,
}

impl Category {
    /// Every known category, in configuration-surface order.
    pub const ALL: &'static [Category] = &[
        Category::AnnexB,
        Category::BestPractice,
        Category::Ch06,
        Category::Ch07,
        Category::Ch08,
        Category::Ch09,
        Category::Ch10,
        Category::Ch11,
        Category::Ch12,
        Category::Ch13,
        Category::Ch14,
        Category::Ch15,
        Category::Intl402,
    ];

    /// Parse a category token. Returns `None` for unknown tokens.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "annexB" => Some(Category::AnnexB),
            "bestPractice" => Some(Category::BestPractice),
            "ch06" => Some(Category::Ch06),
            "ch07" => Some(Category::Ch07),
            "ch08" => Some(Category::Ch08),
            "ch09" => Some(Category::Ch09),
            "ch10" => Some(Category::Ch10),
            "ch11" => Some(Category::Ch11),
            "ch12" => Some(Category::Ch12),
            "ch13" => Some(Category::Ch13),
            "ch14" => Some(Category::Ch14),
            "ch15" => Some(Category::Ch15),
            "intl402" => Some(Category::Intl402),
            _ => None,
        }
    }

    /// Derive the category from a test identifier's leading path segment.
    ///
    /// The segment ends at the first `/` or `\`. Unknown segments yield
    /// `None`, which the filter treats as excluded.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let token = identifier
            .split(&['/', '\\'][..])
            .next()
            .unwrap_or(identifier);
        Self::parse(token)
    }

    /// Name as it appears in manifests and configuration surfaces.
    pub fn name(self) -> &'static str {
        match self {
            Category::AnnexB => "annexB",
            Category::BestPractice => "bestPractice",
            Category::Ch06 => "ch06",
            Category::Ch07 => "ch07",
            Category::Ch08 => "ch08",
            Category::Ch09 => "ch09",
            Category::Ch10 => "ch10",
            Category::Ch11 => "ch11",
            Category::Ch12 => "ch12",
            Category::Ch13 => "ch13",
            Category::Ch14 => "ch14",
            Category::Ch15 => "ch15",
            Category::Intl402 => "intl402",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which categories a run includes.
///
/// Categories absent from the map are excluded (fail-closed), so an
/// unconfigured category never runs silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    enabled: HashMap<Category, bool>,
}

impl CategoryConfig {
    /// Configuration with every known category enabled (session default).
    pub fn all_enabled() -> Self {
        let enabled = Category::ALL.iter().map(|&c| (c, true)).collect();
        Self { enabled }
    }

    /// Configuration with no category enabled.
    pub fn none() -> Self {
        Self {
            enabled: HashMap::new(),
        }
    }

    /// Enable a category.
    pub fn enable(&mut self, category: Category) -> &mut Self {
        self.set(category, true)
    }

    /// Disable a category.
    pub fn disable(&mut self, category: Category) -> &mut Self {
        self.set(category, false)
    }

    /// Set a category's enabled flag.
    pub fn set(&mut self, category: Category, enabled: bool) -> &mut Self {
        self.enabled.insert(category, enabled);
        self
    }

    /// Whether a category is enabled. Missing entries are disabled.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.get(&category).copied().unwrap_or(false)
    }
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self::all_enabled()
    }
}

/// Select the tests a run will execute.
///
/// The result is an order-preserving subsequence of `manifest`: each
/// identifier's category is derived once and looked up once, and identifiers
/// with an unknown or disabled category are excluded. Inputs are not
/// mutated, so reselecting with the same arguments yields the same sequence.
pub fn select_tests(manifest: &[String], config: &CategoryConfig) -> Vec<String> {
    manifest
        .iter()
        .filter(|identifier| {
            Category::from_identifier(identifier)
                .map(|category| config.is_enabled(category))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
