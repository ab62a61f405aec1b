use crate::cli::{Cli, RankDirArg};
use crate::errors::DepGraphError;
use crate::graph::GraphWalker;
use crate::policy::{GraphConfig, DEFAULT_MAX_DEPTH};
use crate::query::{write_stream, GoList, MetadataSource, StaticSource};
use crate::utils::config::{load_config_at, load_config_near, Config};
use crate::utils::split_list;
use crate::visualization::{DotGenerator, DotOptions, RankDir};
use clap::CommandFactory;
use clap_complete::generate;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Everything a run needs once flags and the config file are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    pub graph: GraphConfig,
    pub dot: DotOptions,
    pub go: String,
}

impl Settings {
    /// Merge CLI flags over config file values over built-in defaults.
    ///
    /// A list given on the command line replaces the config list. Boolean flags can
    /// only switch an option on.
    #[must_use]
    pub fn resolve(cli: &Cli, file: &Config) -> Self {
        let list = |flag: &Option<String>, cfg: &Option<Vec<String>>| -> Vec<String> {
            match (flag, cfg) {
                (Some(s), _) => split_list(s),
                (None, Some(v)) => v.iter().map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect(),
                (None, None) => Vec::new(),
            }
        };
        let graph = GraphConfig {
            ignored: list(&cli.ignore_packages, &file.ignore_packages).into_iter().collect(),
            ignored_prefixes: list(&cli.ignore_prefixes, &file.ignore_prefixes),
            ignored_keywords: list(&cli.ignore_keywords, &file.ignore_keywords),
            only_prefixes: list(&cli.only_prefixes, &file.only_prefixes),
            ignore_stdlib: cli.ignore_stdlib || file.ignore_stdlib.unwrap_or(false),
            delve_goroot: cli.delve_goroot || file.delve_goroot.unwrap_or(false),
            include_tests: cli.include_tests || file.include_tests.unwrap_or(false),
            build_tags: list(&cli.tags, &file.tags),
            max_depth: cli.max_depth.or(file.max_depth).unwrap_or(DEFAULT_MAX_DEPTH),
        };
        let dot = DotOptions {
            rankdir: cli.rankdir.map(|r| match r {
                RankDirArg::LR => RankDir::LR,
                RankDirArg::TB => RankDir::TB,
            }),
            trim_prefix: cli.trim_prefix.clone().or_else(|| file.trim_prefix.clone()),
        };
        let go = cli.go.clone().or_else(|| file.go.clone()).unwrap_or_else(|| "go".to_string());
        Self { graph, dot, go }
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the flag-derived level.
pub fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI logic in-process, writing the DOT document to stdout.
///
/// Returns an exit code (0 = success).
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(cli, &mut out) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            1
        }
    }
}

/// Walk the requested package and render it to `out`.
///
/// Nothing is written to `out` unless the whole walk succeeds.
///
/// # Errors
/// Usage errors (not exactly one package), working-directory and config failures,
/// any query failure during the walk, and output/save I/O errors.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), DepGraphError> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, env!("CARGO_PKG_NAME"), &mut *out);
        out.flush()?;
        return Ok(());
    }

    let root = match cli.targets.as_slice() {
        [one] => one.clone(),
        _ => return Err(DepGraphError::Usage("need one package name to process".to_string())),
    };
    let dir = match &cli.dir {
        Some(d) => d.clone(),
        None => std::env::current_dir().map_err(DepGraphError::WorkingDir)?,
    };
    let file_cfg = match &cli.config {
        Some(path) => load_config_at(path)?,
        None => load_config_near(&dir).unwrap_or_default(),
    };
    let settings = Settings::resolve(&cli, &file_cfg);

    let source: Box<dyn MetadataSource> = match &cli.load {
        Some(path) => Box::new(StaticSource::from_reader(BufReader::new(File::open(path)?))?),
        None => Box::new(GoList::new(settings.go.clone(), settings.graph.build_tags.clone())),
    };
    let pkgs = GraphWalker::new(&dir, &settings.graph, source.as_ref()).build(&root)?;
    info!(root = %root, packages = pkgs.len(), "walk complete");

    if let Some(path) = &cli.save {
        write_stream(&pkgs, BufWriter::new(File::create(path)?))?;
        info!("saved package records to {}", path.display());
    }

    DotGenerator::with_options(settings.dot).render(&pkgs, &settings.graph, out)?;
    out.flush()?;
    Ok(())
}
