//! rustfmt formatter
//!
//! Runs `rustfmt` on a freshly written output file.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::ports::Formatter;
use crate::error::{BindataError, BindataResult};

/// Invokes an external `rustfmt` binary.
#[derive(Debug, Clone)]
pub struct Rustfmt {
    program: String,
    edition: String,
}

impl Default for Rustfmt {
    fn default() -> Self {
        Self {
            program: "rustfmt".to_string(),
            edition: "2021".to_string(),
        }
    }
}

impl Rustfmt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: use a different executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl Formatter for Rustfmt {
    fn format(&self, output: &Path) -> BindataResult<()> {
        debug!(program = %self.program, output = %output.display(), "formatting");
        let result = Command::new(&self.program)
            .arg("--edition")
            .arg(&self.edition)
            .arg(output)
            .output()
            .map_err(|e| BindataError::Format {
                output: output.to_path_buf(),
                message: format!("failed to run {}: {}", self.program, e),
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(BindataError::Format {
                output: output.to_path_buf(),
                message: format!("{} exited with {}: {}", self.program, result.status, stderr.trim()),
            });
        }
        Ok(())
    }
}
