//! Recursive dependency walk.
//!
//! `GraphWalker` expands a root package depth-first, in the order the metadata source
//! lists imports, collecting every non-ignored package into a `PackageMap`. A package
//! already in the map is never queried again, so diamonds and cycles cost one query
//! per package.
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, trace};

use crate::errors::DepGraphError;
use crate::package::{Package, PackageMap};
use crate::policy::GraphConfig;
use crate::query::MetadataSource;

/// Dependencies of `pkg` to expand: direct imports, then test and external-test imports
/// when `include_tests` is set. Self-references and repeats are dropped; first occurrence wins.
#[must_use]
pub fn imports<'a>(cfg: &GraphConfig, pkg: &'a Package) -> Vec<&'a str> {
    let mut all: Vec<&'a String> = pkg.imports.iter().collect();
    if cfg.include_tests {
        all.extend(&pkg.test_imports);
        all.extend(&pkg.x_test_imports);
    }
    let mut seen: HashSet<&str> = HashSet::new();
    all.into_iter()
        .map(String::as_str)
        .filter(|imp| *imp != pkg.import_path && seen.insert(*imp))
        .collect()
}

pub struct GraphWalker<'a, S: MetadataSource + ?Sized> {
    dir: &'a Path,
    cfg: &'a GraphConfig,
    source: &'a S,
}

impl<'a, S: MetadataSource + ?Sized> GraphWalker<'a, S> {
    #[must_use]
    pub fn new(dir: &'a Path, cfg: &'a GraphConfig, source: &'a S) -> Self {
        Self { dir, cfg, source }
    }

    /// Walk from `root` into a fresh map.
    ///
    /// # Errors
    /// Returns `DepGraphError::Query` for the first package whose metadata cannot be loaded.
    pub fn build(&self, root: &str) -> Result<PackageMap, DepGraphError> {
        let mut pkgs = PackageMap::new();
        self.walk(root, &mut pkgs, 0)?;
        Ok(pkgs)
    }

    /// Expand `import_path`, found `depth` edges away from the root, into `pkgs`.
    ///
    /// Packages deeper than `max_depth` are silently skipped, as are exact-ignored
    /// paths (without a query) and packages rejected by the filter policy.
    ///
    /// # Errors
    /// Any query failure aborts the whole walk, wrapped with the import path being resolved.
    pub fn walk(&self, import_path: &str, pkgs: &mut PackageMap, depth: usize) -> Result<(), DepGraphError> {
        if depth > self.cfg.max_depth {
            trace!(package = import_path, depth, "depth limit reached");
            return Ok(());
        }
        if self.cfg.ignored.contains(import_path) {
            return Ok(());
        }

        debug!(package = import_path, depth, "querying");
        let pkg = self.source.query(self.dir, import_path).map_err(|source| DepGraphError::Query {
            import_path: import_path.to_string(),
            source,
        })?;
        if self.cfg.is_ignored(&pkg) {
            trace!(package = %pkg.import_path, "filtered");
            return Ok(());
        }

        let expand = self.cfg.expands(&pkg);
        let deps: Vec<String> = if expand {
            imports(self.cfg, &pkg).into_iter().map(str::to_string).collect()
        } else {
            Vec::new()
        };
        pkgs.insert(pkg.import_path.clone(), pkg);

        for dep in deps {
            if !pkgs.contains_key(&dep) {
                self.walk(&dep, pkgs, depth + 1)?;
            }
        }
        Ok(())
    }
}
