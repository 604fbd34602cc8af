//! Workspace matcher
//!
//! Each workspace root holds two parallel trees, an asset side and a code
//! side. The matcher walks both in lockstep using only directory listings
//! and turns every qualifying subtree into a [`Job`] that embeds
//! `<root>/<assets>/<rel>` into `<root>/<code>/<rel>/<output_name>`.
//!
//! ```text
//! root/
//! ├── assets/web/site/{css,js}     input, also the stripped prefix
//! └── code/web/site/               output: code/web/site/bindata.rs
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{InputConfig, Job, JobOptions, DEFAULT_OUTPUT_NAME};
use crate::domain::value_objects::FuncName;
use crate::error::{BindataError, BindataResult};
use crate::infrastructure::fs::absolute;

/// Directory names that are never descended into besides dot-directories
const VCS_DIRS: &[&str] = &["CVS", "_darcs"];

/// Names of the two sides of a workspace root and the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub assets_dir: String,
    pub code_dir: String,
    pub output_name: String,
}

impl Default for WorkspaceLayout {
    fn default() -> Self {
        Self {
            assets_dir: "assets".to_string(),
            code_dir: "code".to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

/// Discover one job per qualifying subtree across all `roots`.
///
/// Candidates whose asset directory is empty are dropped. Finding nothing at
/// all is an error.
pub fn discover(
    roots: &[PathBuf],
    layout: &WorkspaceLayout,
    options: &JobOptions,
) -> BindataResult<Vec<Job>> {
    let mut jobs = Vec::new();

    for root in roots {
        let root = absolute(root)?;
        let asset_root = root.join(&layout.assets_dir);
        let code_root = root.join(&layout.code_dir);

        for rel in find_pairings(&asset_root, &code_root) {
            let input = asset_root.join(&rel);
            if count_entries(&input) == 0 {
                debug!(input = %input.display(), "dropping empty asset directory");
                continue;
            }

            let package = rel
                .file_name()
                .map(|n| FuncName::from_name(&n.to_string_lossy()).to_string())
                .unwrap_or_default();
            let output = code_root.join(&rel).join(&layout.output_name);

            debug!(input = %input.display(), output = %output.display(), "discovered job");
            jobs.push(Job {
                package,
                inputs: vec![InputConfig::new(input.clone(), true)],
                output,
                prefix: input.to_string_lossy().into_owned(),
                options: options.clone(),
            });
        }
    }

    if jobs.is_empty() {
        let roots = std::env::join_paths(roots)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|_| format!("{:?}", roots));
        return Err(BindataError::NoMatchingRoots { roots });
    }
    Ok(jobs)
}

/// Relative paths of every pairing candidate under one root.
///
/// Uses an explicit stack; expansion only happens for names present on both
/// sides, so each step goes one level deeper and the walk terminates.
pub fn find_pairings(asset_root: &Path, code_root: &Path) -> Vec<PathBuf> {
    let mut pending = vec![PathBuf::new()];
    let mut found = Vec::new();

    while let Some(rel) = pending.pop() {
        let top_level = rel.as_os_str().is_empty();

        let (assets, code) = match (
            list_subdirs(&asset_root.join(&rel)),
            list_subdirs(&code_root.join(&rel)),
        ) {
            (Some(a), Some(c)) if !a.is_empty() && !c.is_empty() => (a, c),
            _ => {
                // leaf: the root itself is never a pairing
                if !top_level {
                    found.push(rel);
                }
                continue;
            }
        };

        let mut counts: BTreeMap<&OsString, usize> = BTreeMap::new();
        for name in assets.iter().chain(code.iter()) {
            *counts.entry(name).or_default() += 1;
        }

        for (name, count) in counts {
            if count > 1 {
                pending.push(rel.join(name));
            } else if !top_level && assets.contains(name) {
                found.push(rel.join(name));
            }
        }
    }

    found
}

/// Visible subdirectory names, or `None` when the directory can't be listed.
fn list_subdirs(dir: &Path) -> Option<BTreeSet<OsString>> {
    let entries = fs::read_dir(dir).ok()?;
    let mut names = BTreeSet::new();
    for entry in entries {
        let entry = entry.ok()?;
        if !entry.file_type().ok()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let s = name.to_string_lossy();
        if s.starts_with('.') || VCS_DIRS.contains(&s.as_ref()) {
            continue;
        }
        names.insert(name);
    }
    Some(names)
}

/// Number of direct entries in `dir`; unreadable counts as empty.
fn count_entries(dir: &Path) -> usize {
    fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
