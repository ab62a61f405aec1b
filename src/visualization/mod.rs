use crate::package::{Package, PackageMap};
use crate::policy::GraphConfig;
use std::collections::HashMap;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankDir { LR, TB }

#[derive(Debug, Clone, Default)]
pub struct DotOptions {
    /// Emit a `rankdir` graph attribute; omitted when `None`.
    pub rankdir: Option<RankDir>,
    /// Prefix stripped from node labels only.
    pub trim_prefix: Option<String>,
}

/// Dense node ids for one render pass, handed out on first request starting at 0.
#[derive(Debug, Default)]
pub struct NodeIds {
    ids: HashMap<String, usize>,
}

impl NodeIds {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn get(&mut self, import_path: &str) -> usize {
        if let Some(id) = self.ids.get(import_path) {
            return *id;
        }
        let id = self.ids.len();
        self.ids.insert(import_path.to_string(), id);
        id
    }

    #[must_use]
    pub fn len(&self) -> usize { self.ids.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.ids.is_empty() }
}

#[derive(Debug, Default)]
pub struct DotGenerator {
    opts: DotOptions,
}

impl DotGenerator {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_options(opts: DotOptions) -> Self { Self { opts } }

    /// Render `pkgs` into a `String`.
    #[must_use]
    pub fn generate_dot(&self, pkgs: &PackageMap, cfg: &GraphConfig) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(pkgs, cfg, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Write the DOT document for `pkgs` to `out`.
    ///
    /// Nodes are emitted in lexicographic import-path order with the filter policy
    /// re-applied, so output is byte-identical for the same map and config. GOROOT
    /// packages get no outgoing edges unless `delve_goroot` is set, matching what the
    /// walker expanded.
    ///
    /// # Errors
    /// Propagates any error from `out`.
    pub fn render<W: Write>(&self, pkgs: &PackageMap, cfg: &GraphConfig, out: &mut W) -> io::Result<()> {
        let mut paths: Vec<&String> = pkgs.keys().collect();
        paths.sort();
        let mut ids = NodeIds::new();

        writeln!(out, "digraph G {{")?;
        if let Some(dir) = self.opts.rankdir {
            let rank = match dir { RankDir::LR => "LR", RankDir::TB => "TB" };
            writeln!(out, "rankdir={rank};")?;
        }
        for path in paths {
            let pkg = &pkgs[path];
            let id = ids.get(path);
            if cfg.is_ignored(pkg) {
                continue;
            }
            let (color, font_color) = node_colors(pkg);
            writeln!(
                out,
                "_{id} [label=\"{}\" style=\"filled\" color=\"{color}\" fontcolor=\"{font_color}\"];",
                escape_label(self.label(&pkg.import_path))
            )?;

            if !cfg.expands(pkg) {
                continue;
            }
            for imp in &pkg.imports {
                match pkgs.get(imp) {
                    Some(dep) if !cfg.is_ignored(dep) => {
                        let dep_id = ids.get(imp);
                        writeln!(out, "_{id} -> _{dep_id};")?;
                    }
                    _ => {}
                }
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }

    fn label<'a>(&self, import_path: &'a str) -> &'a str {
        match self.opts.trim_prefix.as_deref() {
            Some(prefix) => import_path.strip_prefix(prefix).unwrap_or(import_path),
            None => import_path,
        }
    }
}

/// Fill color by category, font color by build status.
fn node_colors(pkg: &Package) -> (&'static str, &'static str) {
    let color = if pkg.goroot {
        "palegreen"
    } else if pkg.is_cgo() {
        "darkgoldenrod1"
    } else {
        "paleturquoise"
    };
    let font_color = if pkg.incomplete {
        "red"
    } else if pkg.stale {
        "blue"
    } else {
        "black"
    };
    (color, font_color)
}

fn escape_label(s: &str) -> String {
    s.replace('"', "\\\"")
}
