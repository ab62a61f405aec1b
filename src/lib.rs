//! golist-depgraph — Go package dependency graphs from `go list`
//!
//! Starting from one import path, recursively query `go list -e -json`, filter the
//! packages found, and render the result as a Graphviz DOT digraph.
//!
//! # Features
//! - Depth-first walk in import order; each package is queried at most once
//! - Filters: exact paths, prefixes, keywords, prefix whitelist, standard library
//! - Standard library packages are leaves unless `delve_goroot` is set
//! - Deterministic DOT output (nodes sorted by import path, dense numeric ids)
//! - Offline runs from a saved JSON stream of package records
//!
//! # Quickstart (Library)
//! ```no_run
//! use golist_depgraph::graph::GraphWalker;
//! use golist_depgraph::policy::GraphConfig;
//! use golist_depgraph::query::GoList;
//! use golist_depgraph::visualization::DotGenerator;
//!
//! let cfg = GraphConfig { ignore_stdlib: true, ..GraphConfig::default() };
//! let go = GoList::default();
//! let dir = std::path::Path::new(".");
//! let pkgs = GraphWalker::new(dir, &cfg, &go).build("example.com/app").expect("walk");
//! print!("{}", DotGenerator::new().generate_dot(&pkgs, &cfg));
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! golist-depgraph -s -p golang.org/x/ example.com/app | dot -Tsvg > deps.svg
//! golist-depgraph --save deps.json example.com/app > deps.dot
//! golist-depgraph --load deps.json -o example.com/ example.com/app
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod graph;
pub mod package;
pub mod policy;
pub mod query;
pub mod utils;
pub mod visualization;
