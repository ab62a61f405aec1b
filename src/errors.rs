use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single metadata lookup for one package.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("failed to run `{program}`: {source}")]
    Spawn { program: String, source: std::io::Error },
    #[error("`{program}` exited with {status}: {stderr}")]
    Status { program: String, status: ExitStatus, stderr: String },
    #[error("malformed package JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("no package record in tool output")]
    Empty,
    #[error("package not present in loaded records")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum DepGraphError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to get working directory: {0}")]
    WorkingDir(std::io::Error),

    #[error("failed to import {import_path}: {source}")]
    Query { import_path: String, source: QueryError },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
