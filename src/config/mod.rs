//! Configuration module for bindata
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BINDATA_*)
//! 3. Project config (./bindata.toml or --config)
//! 4. User config (~/.config/bindata/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use loader::{
    load_layered, load_with_warnings, user_config_path, with_env_overrides, PROJECT_CONFIG_FILE,
    ROOTS_ENV_VAR,
};
pub use types::{Config, GenerateConfig, WorkspaceConfig};
