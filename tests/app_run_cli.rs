use golist_depgraph::app::{run, run_cli};
use golist_depgraph::cli::{Cli, RankDirArg};
use golist_depgraph::errors::DepGraphError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_stream(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("pkgs.json");
    fs::write(
        &path,
        r#"{"ImportPath":"example.com/app","Imports":["example.com/lib","C"],"CgoFiles":["bridge.go"]}
{"ImportPath":"example.com/lib","Incomplete":true}
{"ImportPath":"C"}"#,
    )
    .unwrap();
    path
}

#[test]
fn run_writes_dot_with_options() {
    let dir = tempdir().unwrap();
    let cli = Cli {
        targets: vec!["example.com/app".into()],
        dir: Some(dir.path().to_path_buf()),
        load: Some(write_stream(dir.path())),
        ignore_packages: Some("C".into()),
        rankdir: Some(RankDirArg::TB),
        trim_prefix: Some("example.com/".into()),
        ..Cli::default()
    };
    let mut out = Vec::new();
    run(cli, &mut out).unwrap();
    let dot = String::from_utf8(out).unwrap();
    assert_eq!(
        dot,
        "digraph G {\n\
rankdir=TB;\n\
_0 [label=\"app\" style=\"filled\" color=\"darkgoldenrod1\" fontcolor=\"black\"];\n\
_0 -> _1;\n\
_1 [label=\"lib\" style=\"filled\" color=\"paleturquoise\" fontcolor=\"red\"];\n\
}\n"
    );
}

#[test]
fn run_reports_missing_load_file() {
    let dir = tempdir().unwrap();
    let cli = Cli {
        targets: vec!["x".into()],
        dir: Some(dir.path().to_path_buf()),
        load: Some(dir.path().join("nope.json")),
        ..Cli::default()
    };
    let mut out = Vec::new();
    assert!(matches!(run(cli, &mut out), Err(DepGraphError::Io(_))));
    assert!(out.is_empty());
}

#[test]
fn run_cli_exit_codes() {
    let dir = tempdir().unwrap();
    let ok = Cli {
        targets: vec!["example.com/app".into()],
        dir: Some(dir.path().to_path_buf()),
        load: Some(write_stream(dir.path())),
        ..Cli::default()
    };
    assert_eq!(run_cli(ok), 0);

    let missing_root = Cli {
        targets: vec!["example.com/other".into()],
        dir: Some(dir.path().to_path_buf()),
        load: Some(write_stream(dir.path())),
        ..Cli::default()
    };
    assert_eq!(run_cli(missing_root), 1);
    assert_eq!(run_cli(Cli::default()), 1);
}

#[test]
fn save_writes_only_walked_packages() {
    let dir = tempdir().unwrap();
    let saved = dir.path().join("saved.json");
    let cli = Cli {
        targets: vec!["example.com/app".into()],
        dir: Some(dir.path().to_path_buf()),
        load: Some(write_stream(dir.path())),
        ignore_prefixes: Some("example.com/lib".into()),
        save: Some(saved.clone()),
        ..Cli::default()
    };
    let mut out = Vec::new();
    run(cli, &mut out).unwrap();
    let text = fs::read_to_string(saved).unwrap();
    assert!(text.contains("\"ImportPath\": \"C\""));
    assert!(!text.contains("\"ImportPath\": \"example.com/lib\""));
    assert!(!String::from_utf8(out).unwrap().contains("lib"));
}
