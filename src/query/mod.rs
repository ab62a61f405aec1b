use serde_json::Deserializer;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::errors::QueryError;
use crate::package::{Package, PackageMap};

/// Source of package metadata queried by the walker.
///
/// Given a working directory and an import path, returns the single record describing
/// that package. The returned `import_path` is canonical and may differ from the request.
pub trait MetadataSource {
    /// # Errors
    /// Returns a `QueryError` when the record cannot be produced.
    fn query(&self, dir: &Path, import_path: &str) -> Result<Package, QueryError>;
}

/// Queries the Go toolchain with `go list -e -json`.
#[derive(Debug, Clone)]
pub struct GoList {
    pub program: String,
    pub build_tags: Vec<String>,
}

impl Default for GoList {
    fn default() -> Self { Self { program: "go".to_string(), build_tags: Vec::new() } }
}

impl GoList {
    #[must_use]
    pub fn new<S: Into<String>>(program: S, build_tags: Vec<String>) -> Self {
        Self { program: program.into(), build_tags }
    }

    fn args(&self, import_path: &str) -> Vec<String> {
        let mut args = vec!["list".to_string(), "-e".to_string(), "-json".to_string()];
        if !self.build_tags.is_empty() {
            args.push("-tags".to_string());
            args.push(self.build_tags.join(","));
        }
        args.push(import_path.to_string());
        args
    }
}

impl MetadataSource for GoList {
    fn query(&self, dir: &Path, import_path: &str) -> Result<Package, QueryError> {
        let output = Command::new(&self.program)
            .args(self.args(import_path))
            .current_dir(dir)
            .output()
            .map_err(|source| QueryError::Spawn { program: self.program.clone(), source })?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if !output.status.success() {
            return Err(QueryError::Status {
                program: self.program.clone(),
                status: output.status,
                stderr: stderr.to_string(),
            });
        }
        if !stderr.is_empty() {
            info!(package = import_path, "{} reported: {stderr}", self.program);
        }
        first_record(&output.stdout)
    }
}

/// Decode the first JSON document of a `go list -json` stream; later documents are ignored.
///
/// # Errors
/// `QueryError::Decode` for malformed JSON, `QueryError::Empty` when there is no document.
pub fn first_record(bytes: &[u8]) -> Result<Package, QueryError> {
    match Deserializer::from_slice(bytes).into_iter::<Package>().next() {
        Some(pkg) => Ok(pkg?),
        None => Err(QueryError::Empty),
    }
}

/// In-memory records, e.g. a stream previously written with `write_stream`
/// or captured from `go list -json ./...`.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    packages: HashMap<String, Package>,
}

impl StaticSource {
    pub fn new<I: IntoIterator<Item = Package>>(packages: I) -> Self {
        Self { packages: packages.into_iter().map(|p| (p.import_path.clone(), p)).collect() }
    }

    /// Load every JSON document from `reader`. A later record for the same import path
    /// replaces an earlier one.
    ///
    /// # Errors
    /// Returns the decoder error for the first malformed document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let packages = Deserializer::from_reader(reader)
            .into_iter::<Package>()
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = packages.len(), "loaded package records");
        Ok(Self::new(packages))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.packages.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.packages.is_empty() }
}

impl MetadataSource for StaticSource {
    fn query(&self, _dir: &Path, import_path: &str) -> Result<Package, QueryError> {
        self.packages.get(import_path).cloned().ok_or(QueryError::NotFound)
    }
}

/// Write `pkgs` as a JSON stream, one pretty-printed record per package, sorted by import path.
///
/// # Errors
/// Propagates serialization and sink errors.
pub fn write_stream<W: Write>(pkgs: &PackageMap, mut out: W) -> Result<(), crate::errors::DepGraphError> {
    let mut paths: Vec<&String> = pkgs.keys().collect();
    paths.sort();
    for path in paths {
        serde_json::to_writer_pretty(&mut out, &pkgs[path])?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
