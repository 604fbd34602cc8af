//! File collector
//!
//! Walks one input root into an ordered list of assets. Entries come out in
//! directory-listing order, with a subdirectory's files spliced in where the
//! subdirectory was listed.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Asset, Toc};
use crate::domain::value_objects::IgnorePatterns;
use crate::error::{BindataError, BindataResult};
use crate::infrastructure::fs::{absolute, to_slash};

/// Collect every file under `root`.
///
/// - entries whose absolute path matches `ignore` are skipped, and ignored
///   directories are not entered
/// - directories whose name starts with `.` are never entered
/// - with `recursive == false` only the files directly in `root` are taken
///
/// Any unreadable directory aborts the whole pass.
pub fn collect(
    root: &Path,
    prefix: &str,
    recursive: bool,
    ignore: &IgnorePatterns,
) -> BindataResult<Toc> {
    let (dir, prefix) = if prefix.is_empty() {
        (root.to_path_buf(), String::new())
    } else {
        (
            absolute(root).map_err(|source| read_dir_error(root, source))?,
            to_slash(&absolute(Path::new(prefix))?),
        )
    };

    let walker = Walker {
        prefix: &prefix,
        recursive,
        ignore,
    };
    let mut toc = Toc::new();
    walker.visit(&dir, &mut toc)?;
    Ok(toc)
}

struct Walker<'a> {
    prefix: &'a str,
    recursive: bool,
    ignore: &'a IgnorePatterns,
}

impl Walker<'_> {
    fn visit(&self, dir: &Path, toc: &mut Toc) -> BindataResult<()> {
        let entries = fs::read_dir(dir).map_err(|source| read_dir_error(dir, source))?;

        for entry in entries {
            let entry = entry.map_err(|source| read_dir_error(dir, source))?;
            let path = dir.join(entry.file_name());

            if !self.ignore.is_empty() && self.ignore.is_ignored(&absolute(&path)?) {
                debug!(path = %path.display(), "ignored");
                continue;
            }

            let file_type = entry
                .file_type()
                .map_err(|source| read_dir_error(&path, source))?;
            if file_type.is_dir() {
                if self.recursive && !is_hidden(&entry.file_name()) {
                    self.visit(&path, toc)?;
                }
                continue;
            }
            if file_type.is_symlink() && path.is_dir() {
                debug!(path = %path.display(), "symlinked directory not followed");
                continue;
            }

            let name = self.asset_name(&path)?;
            let abs = absolute(&path)?;
            debug!(name = %name, path = %abs.display(), "collected");
            toc.push(Asset::new(abs, name));
        }

        Ok(())
    }

    fn asset_name(&self, path: &Path) -> BindataResult<String> {
        let slashed = to_slash(path);
        let mut name = slashed.as_str();
        if !self.prefix.is_empty() {
            if let Some(stripped) = name.strip_prefix(self.prefix) {
                name = stripped;
            }
        }
        let name = name.strip_prefix('/').unwrap_or(name);

        if name.is_empty() {
            return Err(BindataError::EmptyAssetName {
                path: path.to_path_buf(),
            });
        }
        Ok(name.to_string())
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn read_dir_error(path: &Path, source: std::io::Error) -> BindataError {
    BindataError::ReadDir {
        path: PathBuf::from(path),
        source,
    }
}
