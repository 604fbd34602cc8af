//! Lexical path helpers
//!
//! None of these touch the file system except `absolute`, which reads the
//! current directory. Symlinks are never resolved.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Shortest lexically equivalent path: drops `.`, folds `name/..`.
///
/// An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Absolute, cleaned form of `path`.
pub fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    Ok(clean(&std::path::absolute(path)?))
}

/// Path rendered with `/` separators.
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(MAIN_SEPARATOR, "/")
    }
}

/// Split a platform path list (`:` on Unix, `;` on Windows), dropping empty
/// entries.
pub fn split_path_list(list: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}
