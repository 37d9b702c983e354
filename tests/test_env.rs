//! Environment collaborator tests

use std::path::PathBuf;

use argsift::env::Env;
use argsift::ArgsiftError;

#[test]
fn test_parse_and_lookup() {
    let env = Env::parse_entries(&[
        "HOME=/home/user",
        "SHELL=/bin/sh",
        "MULTI=a=b=c",
    ])
    .unwrap();
    assert_eq!(env.len(), 3);
    assert!(env.contains("SHELL"));
    assert!(!env.contains("shell"));
    assert_eq!(env.get("MULTI"), Some("a=b=c"));
    assert_eq!(env.get_ignore_case("shell"), Some("/bin/sh"));
}

#[test]
fn test_malformed_entry_fails_whole_parse() {
    let err = Env::parse_entries(&["GOOD=1", "BAD", "ALSO=2"]).unwrap_err();
    assert!(matches!(err, ArgsiftError::MalformedEnvEntry(entry) if entry == "BAD"));
}

#[test]
fn test_path_dirs_split() {
    let joined = std::env::join_paths(["/usr/local/bin", "/usr/bin", "/bin"])
        .unwrap()
        .into_string()
        .unwrap();
    let env = Env::parse_entries(&[format!("PATH={joined}")]).unwrap();
    assert_eq!(
        env.path_dirs(),
        [
            PathBuf::from("/usr/local/bin"),
            PathBuf::from("/usr/bin"),
            PathBuf::from("/bin"),
        ]
    );
}

#[test]
fn test_path_dirs_missing() {
    assert!(Env::default().path_dirs().is_empty());
}

#[test]
fn test_home_dir() {
    let env = Env::parse_entries(&["HOME=/home/user"]).unwrap();
    assert_eq!(env.home_dir(), Some(PathBuf::from("/home/user")));
}

#[test]
fn test_os_snapshot_matches_process() {
    // PATH is as close to a universally-present variable as it gets
    if let Ok(path) = std::env::var("PATH") {
        let env = Env::from_os();
        assert_eq!(env.get("PATH"), Some(path.as_str()));
        assert!(!env.is_empty());
    }
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let env = Env::parse_entries(&["B=2", "A=1", "C=3"]).unwrap();
    let names: Vec<&str> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["B", "A", "C"]);
}
