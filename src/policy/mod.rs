//! Filtering options shared by the walker and the renderer.
use crate::package::Package;
use std::collections::HashSet;

/// Default depth limit; deep enough to be effectively unlimited for real module graphs.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Read-only options for one run: which packages to drop and how far to expand.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Exact import paths to ignore.
    pub ignored: HashSet<String>,
    pub ignored_prefixes: Vec<String>,
    /// Substrings; any import path containing one is ignored.
    pub ignored_keywords: Vec<String>,
    /// Whitelist of prefixes. When non-empty, everything else is ignored.
    pub only_prefixes: Vec<String>,
    pub ignore_stdlib: bool,
    /// Expand the imports of GOROOT packages instead of treating them as leaves.
    pub delve_goroot: bool,
    pub include_tests: bool,
    pub build_tags: Vec<String>,
    pub max_depth: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ignored: HashSet::new(),
            ignored_prefixes: Vec::new(),
            ignored_keywords: Vec::new(),
            only_prefixes: Vec::new(),
            ignore_stdlib: false,
            delve_goroot: false,
            include_tests: false,
            build_tags: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GraphConfig {
    /// Decide whether `pkg` is excluded from the graph.
    ///
    /// The whitelist is checked first and short-circuits; otherwise the package is
    /// ignored if it matches the exact set, is a GOROOT package while `ignore_stdlib`
    /// is set, starts with an ignored prefix, or contains an ignored keyword.
    #[must_use]
    pub fn is_ignored(&self, pkg: &Package) -> bool {
        let path = pkg.import_path.as_str();
        if !self.only_prefixes.is_empty() && !has_prefix(path, &self.only_prefixes) {
            return true;
        }
        self.ignored.contains(path)
            || (pkg.goroot && self.ignore_stdlib)
            || has_prefix(path, &self.ignored_prefixes)
            || has_keyword(path, &self.ignored_keywords)
    }

    /// GOROOT packages are leaves unless `delve_goroot` is set.
    #[must_use]
    pub fn expands(&self, pkg: &Package) -> bool {
        !pkg.goroot || self.delve_goroot
    }
}

fn has_prefix(s: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|p| s.starts_with(p.as_str()))
}

fn has_keyword(s: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| s.contains(k.as_str()))
}
