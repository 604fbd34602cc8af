//! Observer port - per-job completion reports from the batch runner

use std::time::Duration;

use crate::domain::entities::Job;
use crate::error::BindataError;

/// Receives exactly one report per submitted job.
///
/// Called from worker threads, possibly concurrently.
pub trait JobObserver: Sync {
    fn job_finished(&self, job: &Job, elapsed: Duration, error: Option<&BindataError>);
}

impl<F> JobObserver for F
where
    F: Fn(&Job, Duration, Option<&BindataError>) + Sync,
{
    fn job_finished(&self, job: &Job, elapsed: Duration, error: Option<&BindataError>) {
        self(job, elapsed, error)
    }
}
