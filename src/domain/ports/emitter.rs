//! Emitter port - renders a table of contents into the output artifact

use crate::domain::entities::{Job, Toc};
use crate::error::BindataResult;

/// Writes the output file for one job.
///
/// Implementations must be deterministic for a given `Toc` order and must
/// not embed timestamps or other run-dependent content.
pub trait Emitter: Sync {
    fn emit(&self, job: &Job, toc: &Toc) -> BindataResult<()>;
}

impl<E: Emitter + ?Sized> Emitter for &E {
    fn emit(&self, job: &Job, toc: &Toc) -> BindataResult<()> {
        (**self).emit(job, toc)
    }
}
