//! Executable path resolution tests

use std::fs;

use argsift::env::Env;
use argsift::resolve::{resolve, resolve_in, split_path};
use tempfile::TempDir;

/// Create an Env whose PATH is the given directories, in order.
fn env_with_path(dirs: &[&TempDir]) -> Env {
    let joined = std::env::join_paths(dirs.iter().map(|d| d.path()))
        .unwrap()
        .into_string()
        .unwrap();
    Env::parse_entries(&[format!("PATH={joined}")]).unwrap()
}

fn touch(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"").unwrap();
}

#[test]
fn test_resolve_bare_name_through_path() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "tool");
    let env = env_with_path(&[&dir]);

    assert_eq!(resolve(&env, "tool"), Some(dir.path().join("tool")));
    assert_eq!(resolve(&env, "missing"), None);
}

#[test]
fn test_resolve_honors_path_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    touch(&first, "tool");
    touch(&second, "tool");
    let env = env_with_path(&[&first, &second]);

    assert_eq!(resolve(&env, "tool"), Some(first.path().join("tool")));
}

#[test]
fn test_resolve_extension_fallback() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "tool.exe");
    let env = env_with_path(&[&dir]);

    assert_eq!(resolve(&env, "tool"), Some(dir.path().join("tool.exe")));
}

#[test]
fn test_bare_name_beats_extension() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "tool");
    touch(&dir, "tool.exe");

    let hit = resolve_in(&[dir.path().to_path_buf()], "tool", &["exe"]).unwrap();
    assert_eq!(hit, dir.path().join("tool"));
}

#[test]
fn test_explicit_directory_skips_path_search() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "tool");
    let env = Env::default(); // no PATH at all

    let arg = dir.path().join("tool").to_string_lossy().into_owned();
    assert_eq!(resolve(&env, &arg), Some(dir.path().join("tool")));

    let missing = dir.path().join("absent").to_string_lossy().into_owned();
    assert_eq!(resolve(&env, &missing), None);
}

#[test]
fn test_split_path_variants() {
    assert_eq!(split_path("/usr/bin/tool"), (Some("/usr/bin/"), "tool"));
    assert_eq!(split_path("relative/tool"), (Some("relative/"), "tool"));
    assert_eq!(split_path("tool"), (None, "tool"));
}
