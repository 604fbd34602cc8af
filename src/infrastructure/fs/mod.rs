//! File System Implementations
//!
//! Lexical path helpers and the local atomic writer used by the emitter.

mod local;
mod paths;

pub use local::LocalFs;
pub use paths::{absolute, clean, split_path_list, to_slash};
