//! Shell scripts standing in for the docker binary.

#![cfg(unix)]
#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Answers like a daemon with two stopped containers, `web` and `db`.
/// Nothing is running; starting `db` fails.
pub const TWO_STOPPED: &str = r#"#!/bin/sh
echo "$*" >> "__LOG__"
if [ "$1" = "--host" ]; then shift 2; fi
case "$1" in
  version)
    echo "27.0.1"
    ;;
  ps)
    case "$*" in
      *status=running*) ;;
      *) printf 'abcdef1234567890\n1122334455667788\n' ;;
    esac
    ;;
  inspect)
    echo '[{"Id":"abcdef1234567890","Name":"/web","State":{"Status":"exited"}},'
    echo ' {"Id":"1122334455667788","Name":"/db","State":{"Status":"created"}}]'
    ;;
  start)
    if [ "$2" = "1122334455" ]; then
      echo "Error response from daemon: cannot start db" >&2
      exit 1
    fi
    echo "$2"
    ;;
  stop)
    echo "$2"
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// `db` is removed between `ps` and `inspect`: inspect prints the record it
/// still has and exits 1.
pub const DB_VANISHES: &str = r#"#!/bin/sh
echo "$*" >> "__LOG__"
case "$1" in
  version)
    echo "27.0.1"
    ;;
  ps)
    printf 'abcdef1234567890\n1122334455667788\n'
    ;;
  inspect)
    echo '[{"Id":"abcdef1234567890","Name":"/web","State":{"Status":"exited"}}]'
    echo "Error: No such object: 1122334455667788" >&2
    exit 1
    ;;
  start)
    echo "$2"
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// Write `script` as `<dir>/<name>`. Returns (script, call log).
pub fn install(dir: &Path, name: &str, script: &str) -> (PathBuf, PathBuf) {
    let log = dir.join(format!("{name}.log"));
    let path = dir.join(name);
    let body = script.replace("__LOG__", &log.display().to_string());
    std::fs::write(&path, body).expect("failed to write fake docker");
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    (path, log)
}

pub fn calls(log: &Path) -> Vec<String> {
    std::fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
