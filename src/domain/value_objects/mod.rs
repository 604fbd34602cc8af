//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod func_name;
mod ignore_patterns;

pub use config_warning::ConfigWarning;
pub use func_name::FuncName;
pub use ignore_patterns::IgnorePatterns;
