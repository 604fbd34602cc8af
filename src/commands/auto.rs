use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use bindata::config::{Config, ROOTS_ENV_VAR};
use bindata::{discover, run_batch, BindataError, Job, JobOptions, RustEmitter, Rustfmt};

use crate::ui::output::{job_event, job_line};

/// Roots given on the command line win over config and `BINDATA_PATH`.
pub fn resolve_roots(cli_roots: Vec<PathBuf>, config: &Config) -> Result<Vec<PathBuf>> {
    let roots = if cli_roots.is_empty() {
        config.workspace.roots.clone()
    } else {
        cli_roots
    };
    if roots.is_empty() {
        bail!(
            "no workspace roots: pass them to `bindata auto`, set {} or workspace.roots",
            ROOTS_ENV_VAR
        );
    }
    Ok(roots)
}

/// Generate one module per discovered pair; `false` if any job failed.
pub fn cmd_auto(roots: &[PathBuf], config: &Config, options: &JobOptions, json: bool) -> Result<bool> {
    let jobs = discover(roots, &config.layout(), options)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "auto",
            "jobs": jobs.len(),
        }))?;
    }

    let report = |job: &Job, elapsed: Duration, error: Option<&BindataError>| {
        if json {
            let _ = crate::ui::json::emit(job_event(job, elapsed, error));
        } else {
            println!("{}", job_line(job, elapsed, error));
        }
    };

    let ok = run_batch(jobs, &RustEmitter::new(), &Rustfmt::new(), &report);

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "auto",
            "success": ok,
        }))?;
    }
    Ok(ok)
}
