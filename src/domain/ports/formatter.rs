//! Formatter port - optional post-processing of a written output file

use std::path::Path;

use crate::error::BindataResult;

/// Reformats an output file in place.
pub trait Formatter: Sync {
    fn format(&self, output: &Path) -> BindataResult<()>;
}

/// Formatter that leaves files untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFormat;

impl Formatter for NoFormat {
    fn format(&self, _output: &Path) -> BindataResult<()> {
        Ok(())
    }
}

impl<F: Formatter + ?Sized> Formatter for &F {
    fn format(&self, output: &Path) -> BindataResult<()> {
        (**self).format(output)
    }
}
