//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::WorkspaceLayout;
use crate::domain::entities::{JobOptions, DEFAULT_OUTPUT_NAME, DEFAULT_PACKAGE};
use crate::domain::value_objects::IgnorePatterns;
use crate::error::BindataResult;

use super::loader;

/// Defaults for every generated module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_package")]
    pub package: String,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub tags: String,

    #[serde(default)]
    pub debug: bool,

    #[serde(default)]
    pub no_memcopy: bool,

    #[serde(default)]
    pub no_compress: bool,

    #[serde(default)]
    pub fmt: bool,

    /// Regular expressions matched against absolute paths
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            output: None,
            prefix: String::new(),
            tags: String::new(),
            debug: false,
            no_memcopy: false,
            no_compress: false,
            fmt: false,
            ignore: Vec::new(),
        }
    }
}

fn default_package() -> String {
    DEFAULT_PACKAGE.to_string()
}

/// Automatic mode: where to look for asset/code tree pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Explicit roots; when empty, `BINDATA_PATH` is used
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_code_dir")]
    pub code_dir: String,

    #[serde(default = "default_output_name")]
    pub output_name: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            assets_dir: default_assets_dir(),
            code_dir: default_code_dir(),
            output_name: default_output_name(),
        }
    }
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_code_dir() -> String {
    "code".to_string()
}

fn default_output_name() -> String {
    DEFAULT_OUTPUT_NAME.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub workspace: WorkspaceConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> BindataResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Options shared by every job, with ignore patterns compiled.
    pub fn job_options(&self) -> BindataResult<JobOptions> {
        Ok(JobOptions {
            tags: self.generate.tags.clone(),
            debug: self.generate.debug,
            no_memcopy: self.generate.no_memcopy,
            no_compress: self.generate.no_compress,
            fmt: self.generate.fmt,
            ignore: IgnorePatterns::new(&self.generate.ignore)?,
        })
    }

    /// Matcher layout for automatic mode.
    pub fn layout(&self) -> WorkspaceLayout {
        WorkspaceLayout {
            assets_dir: self.workspace.assets_dir.clone(),
            code_dir: self.workspace.code_dir.clone(),
            output_name: self.workspace.output_name.clone(),
        }
    }
}
