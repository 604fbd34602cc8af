//! Asset entity - one input file destined for embedding

use std::path::{Path, PathBuf};

use crate::domain::value_objects::FuncName;

/// A single file to embed.
///
/// `name` is the slash-separated lookup key (never empty, never starting
/// with `/`); `func` is the accessor identifier derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: PathBuf,
    name: String,
    func: FuncName,
}

impl Asset {
    /// Create an asset from its absolute path and already-stripped name.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        let name = name.into();
        let func = FuncName::from_name(&name);
        Self {
            path: path.into(),
            name,
            func,
        }
    }

    /// Absolute location of the input file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Logical lookup key
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessor identifier
    pub fn func(&self) -> &FuncName {
        &self.func
    }
}
