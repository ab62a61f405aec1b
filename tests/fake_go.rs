#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

// Stands in for `go list -e -json [...] <pkg>`: logs its arguments and answers from a table.
const FAKE_GO: &str = r#"#!/bin/sh
for last; do :; done
echo "$@" >> "$(dirname "$0")/calls.log"
case "$last" in
  app) echo '{"ImportPath":"app","Imports":["libA","libB"]}' ;;
  libA) echo '{"ImportPath":"libA","Imports":["libC"]}' ;;
  libB) echo 'warning: libB uses a deprecated module' >&2
        echo '{"ImportPath":"libB","Imports":["libC"]}' ;;
  libC) echo '{"ImportPath":"libC","Goroot":true,"Imports":["unsafe"]}'
        echo '{"ImportPath":"second-document-is-ignored"}' ;;
  *) echo "can't load package: $last" >&2; exit 1 ;;
esac
"#;

fn install_fake_go(dir: &Path) -> PathBuf {
    let path = dir.join("go");
    fs::write(&path, FAKE_GO).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn walks_through_the_go_tool() {
    let dir = tempdir().unwrap();
    let go = install_fake_go(dir.path());

    Command::cargo_bin("golist-depgraph")
        .unwrap()
        .arg("--dir").arg(dir.path())
        .arg("--go").arg(&go)
        .arg("--tags").arg("netgo,osusergo")
        .arg("app")
        .assert()
        .success()
        .stdout(predicate::str::contains("_1 -> _3;"))
        .stdout(predicate::str::contains("_2 -> _3;"))
        .stdout(predicate::str::contains("second-document-is-ignored").not())
        .stderr(predicate::str::contains("libB uses a deprecated module"));

    let calls = fs::read_to_string(dir.path().join("calls.log")).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    // libC is shared by libA and libB but queried once; it is a GOROOT leaf so `unsafe` is never asked for.
    assert_eq!(
        lines,
        vec![
            "list -e -json -tags netgo,osusergo app",
            "list -e -json -tags netgo,osusergo libA",
            "list -e -json -tags netgo,osusergo libC",
            "list -e -json -tags netgo,osusergo libB",
        ]
    );

    // With delve, `unsafe` is queried, the tool fails, and the whole run fails.
    Command::cargo_bin("golist-depgraph")
        .unwrap()
        .arg("--dir").arg(dir.path())
        .arg("--go").arg(&go)
        .arg("-d")
        .arg("app")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to import unsafe"));
}
