use crossbeam_channel::Receiver;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crate::format::DecodeError;
use crate::{FileOutcome, Opts};

use super::context::{Job, RunCounters};
use super::error_handler::RunError;

/// Per-file decode step run by each worker. The runner uses [`crate::process_file`].
pub type FileProcessor =
    Arc<dyn Fn(&Path, &Opts) -> Result<FileOutcome, DecodeError> + Send + Sync>;

/// Single file worker: take jobs from `job_rx` and run each through `process`.
/// Failures are logged with the input path and counted; they never stop the worker.
/// Jobs still queued after a cancel request are drained without being started.
fn file_worker_loop(
    job_rx: Receiver<Job>,
    opts: Arc<Opts>,
    counters: Arc<RunCounters>,
    cancel: Arc<AtomicBool>,
    process: FileProcessor,
) {
    while let Ok(job) = job_rx.recv() {
        if cancel.load(Ordering::Relaxed) {
            continue;
        }
        match process(&job.path, &opts) {
            Ok(outcome) => {
                if let Some(out) = outcome.output() {
                    log::info!(
                        "{:6}: processing {} -> {}",
                        job.index,
                        job.path.display(),
                        out.display()
                    );
                } else {
                    log::trace!("{}: not an SVS file", job.path.display());
                }
                counters.record(&outcome);
            }
            Err(e) => {
                log::error!("{}: {}", job.path.display(), e);
                counters.record_failure();
            }
        }
    }
}

/// Spawn `num_workers` file workers. Caller must drop its sender once feeding is done so workers exit.
///
/// If a spawn fails, the workers already started are returned alongside the error so the
/// caller can still drain them.
pub fn spawn_file_workers(
    job_rx: &Receiver<Job>,
    opts: &Arc<Opts>,
    counters: &Arc<RunCounters>,
    cancel: &Arc<AtomicBool>,
    process: &FileProcessor,
    num_workers: usize,
) -> (Vec<JoinHandle<()>>, Option<RunError>) {
    let mut handles = Vec::with_capacity(num_workers);
    for i in 0..num_workers {
        let job_rx = job_rx.clone();
        let opts = Arc::clone(opts);
        let counters = Arc::clone(counters);
        let cancel = Arc::clone(cancel);
        let process = Arc::clone(process);
        let spawned = thread::Builder::new()
            .name(format!("svs-worker-{i}"))
            .spawn(move || file_worker_loop(job_rx, opts, counters, cancel, process));
        match spawned {
            Ok(h) => handles.push(h),
            Err(e) => {
                return (
                    handles,
                    Some(RunError::Pool(format!("spawn worker {i}: {e}"))),
                );
            }
        }
    }
    (handles, None)
}
