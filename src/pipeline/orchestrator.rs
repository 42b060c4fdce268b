use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crate::engine::process_file;
use crate::utils::ensure_dir;
use crate::{Opts, RunSummary};

use super::context::{PipelineChannels, create_pipeline_channels};
use super::error_handler::RunError;
use super::walk::{InputSource, spawn_feed_thread};
use super::workers::{FileProcessor, spawn_file_workers};

/// Main orchestrator: decode every file from `source` with at most `opts.workers()` in flight.
///
/// Feed thread → bounded job channel → file workers. Returns once the source is exhausted
/// (or `cancel` is set) and every started file has finished. Per-file failures are counted
/// in the summary; only output-root creation and pool failures are errors.
pub fn run_pipeline(
    source: InputSource,
    opts: &Opts,
    cancel: Arc<AtomicBool>,
) -> Result<RunSummary, RunError> {
    run_pipeline_with(source, opts, cancel, Arc::new(process_file))
}

/// [`run_pipeline`] with a caller-supplied per-file step in place of [`process_file`].
pub fn run_pipeline_with(
    source: InputSource,
    opts: &Opts,
    cancel: Arc<AtomicBool>,
    process: FileProcessor,
) -> Result<RunSummary, RunError> {
    let opts = opts.clone().normalized();
    ensure_dir(&opts.datadir).map_err(|source| RunError::OutputRoot {
        path: opts.datadir.clone(),
        source,
    })?;
    debug!(
        "Output root {}, {} files per shard, {} workers",
        opts.datadir.display(),
        opts.files_per_dir(),
        opts.workers()
    );

    let PipelineChannels {
        job_tx,
        job_rx,
        opts,
        counters,
        ctx,
    } = create_pipeline_channels(&opts, Arc::clone(&cancel));

    let (worker_handles, spawn_err) =
        spawn_file_workers(&job_rx, &opts, &counters, &cancel, &process, opts.workers());
    drop(job_rx);
    if let Some(err) = spawn_err {
        drop(job_tx);
        let _ = shutdown_workers(worker_handles);
        return Err(err);
    }

    // job_tx moves into the feed thread; dropping it there closes the channel so workers exit.
    let feed_handle = match spawn_feed_thread(job_tx, ctx, source) {
        Ok(h) => h,
        Err(err) => {
            let _ = shutdown_workers(worker_handles);
            return Err(err);
        }
    };

    let fed = feed_handle.join();
    let drained = shutdown_workers(worker_handles);
    let dispatched = fed.map_err(|_| RunError::Pool("feed thread panicked".to_string()))?;
    drained?;
    debug!("All workers drained; {} files dispatched", dispatched);

    Ok(counters.snapshot(cancel.load(Ordering::Relaxed)))
}

/// Join every worker (after the job channel has closed). A panicked worker fails the drain.
pub fn shutdown_workers(worker_handles: Vec<JoinHandle<()>>) -> Result<(), RunError> {
    let panicked = worker_handles
        .into_iter()
        .map(|h| h.join())
        .filter(|r| r.is_err())
        .count();
    match panicked {
        0 => Ok(()),
        n => Err(RunError::Pool(format!("{} workers panicked", n))),
    }
}
