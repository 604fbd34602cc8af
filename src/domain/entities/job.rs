//! Job entity - one generation task producing exactly one output file

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{FuncName, IgnorePatterns};
use crate::error::{BindataError, BindataResult};

/// Module name used when none is configured
pub const DEFAULT_PACKAGE: &str = "assets";

/// File name used when no output is configured
pub const DEFAULT_OUTPUT_NAME: &str = "bindata.rs";

/// Suffix that marks an input path for recursive traversal
const RECURSIVE_SUFFIX: &str = "/...";

/// One traversal root within a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub path: PathBuf,
    pub recursive: bool,
}

impl InputConfig {
    pub fn new(path: impl Into<PathBuf>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
        }
    }

    /// Parse a command-line input: `dir/...` is recursive, `dir` is not.
    pub fn parse(arg: &str) -> Self {
        match arg.strip_suffix(RECURSIVE_SUFFIX) {
            Some(stripped) => Self::new(crate::infrastructure::fs::clean(Path::new(stripped)), true),
            None => Self::new(crate::infrastructure::fs::clean(Path::new(arg)), false),
        }
    }
}

/// Options shared by every job of a run.
///
/// In automatic mode these are copied onto each discovered job.
#[derive(Debug, Clone, Default)]
pub struct JobOptions {
    /// `cfg` predicate wrapped around the generated module, empty for none
    pub tags: String,
    /// Read assets from disk at run time instead of embedding them
    pub debug: bool,
    /// Hand out borrowed slices of the embedded data (needs `no_compress`)
    pub no_memcopy: bool,
    /// Embed raw bytes instead of gzip streams
    pub no_compress: bool,
    /// Run the formatter on the output
    pub fmt: bool,
    pub ignore: IgnorePatterns,
}

/// Everything needed to produce one output file.
#[derive(Debug, Clone)]
pub struct Job {
    pub package: String,
    pub inputs: Vec<InputConfig>,
    pub output: PathBuf,
    /// Path prefix stripped off asset names; empty strips nothing
    pub prefix: String,
    pub options: JobOptions,
}

impl Default for Job {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            inputs: Vec::new(),
            output: PathBuf::new(),
            prefix: String::new(),
            options: JobOptions::default(),
        }
    }
}

impl Job {
    pub fn new(package: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Builder: add an input root
    pub fn with_input(mut self, input: InputConfig) -> Self {
        self.inputs.push(input);
        self
    }

    /// Builder: set the prefix to strip
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builder: set shared options
    pub fn with_options(mut self, options: JobOptions) -> Self {
        self.options = options;
        self
    }

    /// Checks that need no file system access.
    pub fn check_shape(&self) -> BindataResult<()> {
        if self.package.is_empty() {
            return Err(BindataError::MissingPackage);
        }
        if !FuncName::is_valid(&self.package) {
            return Err(BindataError::InvalidPackage {
                name: self.package.clone(),
            });
        }
        if self.inputs.is_empty() {
            return Err(BindataError::NoInputs);
        }
        Ok(())
    }

    /// First input path, used to label the job in reports.
    pub fn label(&self) -> &Path {
        self.inputs
            .first()
            .map(|i| i.path.as_path())
            .unwrap_or_else(|| Path::new(""))
    }
}
