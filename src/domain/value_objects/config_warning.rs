//! Unknown-key warning raised while reading a config file.

use std::fmt;
use std::path::PathBuf;

/// A key present in a config file that no setting reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the dotted key path, e.g. `no_compres`
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, when found
    pub line: Option<usize>,
    /// Closest known key, when one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        Ok(())
    }
}
