//! Batch runner
//!
//! Runs independent jobs on a bounded pool of worker threads. Workers pull
//! from one closed-after-fill queue; every job is reported to the observer
//! exactly once, and one failure never stops the others.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{bounded, unbounded};
use tracing::{debug, error};

use crate::application::generate::generate;
use crate::domain::entities::Job;
use crate::domain::ports::{Emitter, Formatter, JobObserver};

/// Number of workers for `jobs` jobs: `min(available parallelism, jobs)`.
pub fn worker_count(jobs: usize) -> usize {
    let cpus = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    cpus.min(jobs)
}

/// Generate every job concurrently.
///
/// Returns true iff every job succeeded. No retries, no cancellation: each
/// dispatched job runs to completion.
pub fn run_batch<E, F, O>(jobs: Vec<Job>, emitter: &E, formatter: &F, observer: &O) -> bool
where
    E: Emitter + ?Sized,
    F: Formatter + ?Sized,
    O: JobObserver + ?Sized,
{
    let total = jobs.len();
    if total == 0 {
        return true;
    }

    let (job_tx, job_rx) = bounded::<Job>(total);
    for job in jobs {
        // capacity equals job count, so this never blocks
        let _ = job_tx.send(job);
    }
    drop(job_tx);

    let (done_tx, done_rx) = unbounded::<bool>();
    let workers = worker_count(total);
    debug!(jobs = total, workers, "starting batch");

    thread::scope(|scope| {
        for id in 0..workers {
            let job_rx = job_rx.clone();
            let done_tx = done_tx.clone();
            scope.spawn(move || {
                for job in job_rx.iter() {
                    let begin = Instant::now();
                    let result = generate(&job, emitter, formatter);
                    let elapsed = begin.elapsed();
                    if let Err(e) = &result {
                        error!(worker = id, output = %job.output.display(), error = %e, "job failed");
                    }
                    observer.job_finished(&job, elapsed, result.as_ref().err());
                    let _ = done_tx.send(result.is_ok());
                }
            });
        }
    });
    drop(done_tx);

    let mut ok = true;
    let mut reported = 0;
    for success in done_rx.iter() {
        reported += 1;
        ok &= success;
    }
    ok && reported == total
}
