//! Local File System Implementation
//!
//! Atomic writes for generated output files.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Local file system writer
///
/// Output is staged in a temp file next to the destination and renamed into
/// place, so readers never observe a half-written module.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` atomically, creating parent directories.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> std::io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
