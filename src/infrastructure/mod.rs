//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `emitter/` - Rust source emitter (release and debug modes)
//! - `formatter` - rustfmt invocation
//! - `fs/` - path helpers and the atomic local writer

pub mod emitter;
pub mod formatter;
pub mod fs;

pub use emitter::RustEmitter;
pub use formatter::Rustfmt;
pub use fs::LocalFs;
