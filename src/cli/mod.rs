use clap::{ArgAction, Parser, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser, Default)]
#[command(
    name = "golist-depgraph",
    version,
    about = "Graph the dependencies of a Go package as Graphviz DOT",
    long_about = "Recursively query `go list -json` starting from one package and print a Graphviz DOT digraph of its imports to stdout. Standard library packages are leaves unless --delve-goroot is given. Defaults for every filter can be set in golist-depgraph.toml in the working directory."
)]
pub struct Cli {
    /// Import path of the package to graph (exactly one)
    #[arg(value_name = "PACKAGE")]
    pub targets: Vec<String>,

    /// Ignore packages in the Go standard library
    #[arg(short = 's', long, default_value_t = false)]
    pub ignore_stdlib: bool,

    /// Show dependencies of packages in the Go standard library
    #[arg(short = 'd', long, default_value_t = false)]
    pub delve_goroot: bool,

    /// Comma-separated list of import path prefixes to ignore
    #[arg(short = 'p', long, value_name = "LIST")]
    pub ignore_prefixes: Option<String>,

    /// Comma-separated list of packages to ignore
    #[arg(short = 'i', long, value_name = "LIST")]
    pub ignore_packages: Option<String>,

    /// Comma-separated list of keywords; packages containing any are ignored
    #[arg(short = 'k', long, value_name = "LIST")]
    pub ignore_keywords: Option<String>,

    /// Comma-separated list of prefixes; only matching packages are kept
    #[arg(short = 'o', long, value_name = "LIST")]
    pub only_prefixes: Option<String>,

    /// Comma-separated list of build tags passed to `go list`
    #[arg(long, value_name = "LIST")]
    pub tags: Option<String>,

    /// Include test imports
    #[arg(short = 't', long, default_value_t = false)]
    pub include_tests: bool,

    /// Maximum depth of the dependency graph [default: 256]
    #[arg(short = 'l', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Prefix stripped from node labels
    #[arg(long, value_name = "PREFIX")]
    pub trim_prefix: Option<String>,

    /// DOT rank direction
    #[arg(long, value_enum)]
    pub rankdir: Option<RankDirArg>,

    /// Directory to run `go list` in (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Go toolchain binary
    #[arg(long, env = "GOLIST_DEPGRAPH_GO", value_name = "BIN")]
    pub go: Option<String>,

    /// Read package records from a JSON stream instead of running `go list`
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Save the walked package records as a JSON stream
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankDirArg {
    #[value(name = "LR")]
    LR,
    #[value(name = "TB")]
    TB,
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
