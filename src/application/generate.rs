//! Single-job generation
//!
//! Validate, collect every input in declared order, hand the table of
//! contents to the emitter, then optionally run the formatter.

use std::fs;

use tracing::info;

use crate::application::collect::collect;
use crate::domain::entities::{Job, Toc, DEFAULT_OUTPUT_NAME};
use crate::domain::ports::{Emitter, Formatter};
use crate::error::{BindataError, BindataResult};

/// Check a job against the file system and fill in defaults.
///
/// Runs before any collection: inputs must exist, the output must not be a
/// directory, and the output's parent directory is created if missing. An
/// empty output becomes `<cwd>/bindata.rs`.
pub fn validate(job: &mut Job) -> BindataResult<()> {
    job.check_shape()?;

    for input in &job.inputs {
        fs::symlink_metadata(&input.path).map_err(|source| BindataError::InputNotFound {
            path: input.path.clone(),
            source,
        })?;
    }

    if job.output.as_os_str().is_empty() {
        job.output = std::env::current_dir()?.join(DEFAULT_OUTPUT_NAME);
    }

    match fs::symlink_metadata(&job.output) {
        Ok(meta) if meta.is_dir() => {
            return Err(BindataError::OutputIsDirectory {
                path: job.output.clone(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

/// Build the table of contents for a validated job.
pub fn build_toc(job: &Job) -> BindataResult<Toc> {
    let mut toc = Toc::new();
    for input in &job.inputs {
        toc.append(collect(
            &input.path,
            &job.prefix,
            input.recursive,
            &job.options.ignore,
        )?);
    }

    toc.ensure_unique_names()?;
    Ok(toc)
}

/// Run one job to completion on the calling thread.
pub fn generate<E, F>(job: &Job, emitter: &E, formatter: &F) -> BindataResult<()>
where
    E: Emitter + ?Sized,
    F: Formatter + ?Sized,
{
    let mut job = job.clone();
    validate(&mut job)?;

    let toc = build_toc(&job)?;
    emitter.emit(&job, &toc)?;

    if job.options.fmt {
        formatter.format(&job.output)?;
    }

    info!(output = %job.output.display(), assets = toc.len(), "generated");
    Ok(())
}
