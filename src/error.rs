//! Error types for bindata
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bindata operations
pub type BindataResult<T> = Result<T, BindataError>;

/// Main error type for bindata operations
#[derive(Error, Debug)]
pub enum BindataError {
    /// Job has no package (module) name
    #[error("missing package name")]
    MissingPackage,

    /// Package name is not a legal identifier
    #[error("invalid package name '{name}' - must match [a-z_][a-z0-9_]*")]
    InvalidPackage { name: String },

    /// Job has no input roots
    #[error("no input directories given")]
    NoInputs,

    /// Input root could not be stat'ed
    #[error("failed to stat input path '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output path points at an existing directory
    #[error("output path '{}' is a directory", path.display())]
    OutputIsDirectory { path: PathBuf },

    /// Ignore pattern failed to compile
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// More ignore patterns than the matcher accepts
    #[error("too many ignore patterns (limit {limit})")]
    TooManyIgnorePatterns { limit: usize },

    /// Malformed configuration file
    #[error("invalid configuration in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// A directory could not be opened or listed during collection
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The workspace matcher found nothing to generate
    #[error("no matching asset directories found under: {roots}")]
    NoMatchingRoots { roots: String },

    /// Prefix stripping left an empty asset name
    #[error("invalid file: {} (asset name is empty after stripping prefix)", path.display())]
    EmptyAssetName { path: PathBuf },

    /// Two files resolved to the same asset name
    #[error("duplicate asset name '{name}': {} and {}", first.display(), second.display())]
    DuplicateAsset {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// Two assets would define the same item in the generated module
    #[error("assets '{first}' and '{second}' both generate the item '{ident}'")]
    IdentifierCollision {
        ident: String,
        first: String,
        second: String,
    },

    /// An asset file could not be read while emitting
    #[error("failed to read asset '{}': {source}", path.display())]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The emitter failed to write the output artifact
    #[error("failed to write {}: {source}", output.display())]
    Emit {
        output: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external formatter failed
    #[error("formatting {} failed: {message}", output.display())]
    Format { output: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
