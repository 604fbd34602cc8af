//! bindata - embed static asset trees into Rust source
//!
//! Walks input directories, names each file by its path relative to an
//! optional prefix, and writes a Rust module exposing the contents as
//! in-memory byte data. Automatic mode pairs `assets/` and `code/` trees
//! across workspace roots and generates one module per pair in parallel.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{collect, discover, find_pairings, generate, run_batch, WorkspaceLayout};
pub use config::Config;
pub use domain::entities::{Asset, InputConfig, Job, JobOptions, Toc};
pub use domain::ports::{Emitter, Formatter, JobObserver, NoFormat};
pub use domain::value_objects::{FuncName, IgnorePatterns};
pub use error::{BindataError, BindataResult};
pub use infrastructure::{LocalFs, RustEmitter, Rustfmt};
