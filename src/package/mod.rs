//! Package records as reported by `go list -json`.
//!
//! Only the fields the grapher consumes are modelled. Every field is optional on the
//! wire and falls back to its empty/false value when absent, so partially populated
//! records (e.g. from `go list -e` on a broken package) still decode.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Packages collected by a walk, keyed by canonical import path.
pub type PackageMap = HashMap<String, Package>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Package {
    pub import_path: String,
    pub name: String,
    pub dir: String,
    /// Package lives under GOROOT (standard library or toolchain internals).
    pub goroot: bool,
    pub standard: bool,
    pub imports: Vec<String>,
    pub test_imports: Vec<String>,
    #[serde(rename = "XTestImports")]
    pub x_test_imports: Vec<String>,
    pub cgo_files: Vec<String>,
    pub incomplete: bool,
    pub stale: bool,
    pub stale_reason: String,
}

impl Package {
    /// Minimal record with just an import path and its direct imports.
    #[must_use]
    pub fn new<S: Into<String>>(import_path: S, imports: &[&str]) -> Self {
        Self {
            import_path: import_path.into(),
            imports: imports.iter().map(|s| (*s).to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_goroot(mut self, goroot: bool) -> Self {
        self.goroot = goroot;
        self
    }

    /// True when the package bridges to C via cgo.
    #[must_use]
    pub fn is_cgo(&self) -> bool {
        !self.cgo_files.is_empty()
    }
}
