//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod emitter;
pub mod formatter;
pub mod observer;

pub use emitter::Emitter;
pub use formatter::{Formatter, NoFormat};
pub use observer::JobObserver;
