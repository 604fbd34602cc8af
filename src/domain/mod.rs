//! Domain Layer
//!
//! Pure types and the interfaces the generation pipeline talks through.
//!
//! ## Structure
//!
//! - `entities/` - Asset, Toc, Job
//! - `value_objects/` - FuncName, IgnorePatterns, ConfigWarning
//! - `ports/` - Emitter, Formatter and JobObserver traits

pub mod entities;
pub mod ports;
pub mod value_objects;
