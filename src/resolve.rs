//! Executable path resolution
//!
//! Collaborator module: resolves the location of a command name (typically
//! argv[0]) through the PATH directory list, with an extension fallback for
//! platforms that name executables `name.ext`.

use std::path::{Path, PathBuf};

use crate::env::Env;

/// Extensions tried after the bare name when probing each PATH directory.
pub const DEFAULT_EXTENSIONS: &[&str] = &["exe", "bat", "sh"];

/// Split a path-like argument into its directory part and file name.
///
/// Both `/` and `\` count as separators; the separator stays with the
/// directory part.
pub fn split_path(arg: &str) -> (Option<&str>, &str) {
    match arg.rfind(['/', '\\']) {
        Some(pos) => (Some(&arg[..=pos]), &arg[pos + 1..]),
        None => (None, arg),
    }
}

/// Probe `dirs` in order for `name`, then `name.ext` for each extension.
/// Returns the first path that exists on the filesystem.
pub fn resolve_in(dirs: &[PathBuf], name: &str, extensions: &[&str]) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        for ext in extensions {
            let candidate = dir.join(format!("{}.{}", name, ext));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Resolve a command-line name to an on-disk path.
///
/// Arguments that already carry a directory part are checked directly; bare
/// names are searched through the environment's PATH directories.
pub fn resolve(env: &Env, arg: &str) -> Option<PathBuf> {
    let (dir, name) = split_path(arg);
    match dir {
        Some(_) => {
            let path = Path::new(arg);
            path.is_file().then(|| path.to_path_buf())
        }
        None => resolve_in(&env.path_dirs(), name, DEFAULT_EXTENSIONS),
    }
}
