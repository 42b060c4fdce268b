//! Pipeline context: channels and shared run state handed to the feed thread and workers.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{FileOutcome, Opts, RunSummary};

/// One queued input. `index` is the 1-based dispatch order, used only for log lines.
#[derive(Clone, Debug)]
pub struct Job {
    pub index: usize,
    pub path: PathBuf,
}

/// Outcome tallies shared by all workers.
#[derive(Debug, Default)]
pub struct RunCounters {
    processed: AtomicUsize,
    failed: AtomicUsize,
    skipped: AtomicUsize,
}

impl RunCounters {
    pub fn record(&self, outcome: &FileOutcome) {
        let counter = match outcome {
            FileOutcome::Skipped => &self.skipped,
            _ => &self.processed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self, cancelled: bool) -> RunSummary {
        RunSummary {
            processed: self.processed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            cancelled,
        }
    }
}

/// Shared context for the feed thread: input filtering and the cancel flag.
pub struct PipelineContext {
    pub keep_bad: bool,
    pub cancel: Arc<AtomicBool>,
}

impl PipelineContext {
    pub fn cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

/// Channels and shared state for one run. Feed thread gets `job_tx` + `ctx`; workers get `job_rx`.
pub struct PipelineChannels {
    pub job_tx: Sender<Job>,
    pub job_rx: Receiver<Job>,
    pub opts: Arc<Opts>,
    pub counters: Arc<RunCounters>,
    pub ctx: PipelineContext,
}

/// Job channel capacity equals the worker count: the feeder blocks once every worker is busy
/// and one job per worker is queued.
pub fn create_pipeline_channels(opts: &Opts, cancel: Arc<AtomicBool>) -> PipelineChannels {
    let (job_tx, job_rx) = bounded::<Job>(opts.workers());
    PipelineChannels {
        job_tx,
        job_rx,
        opts: Arc::new(opts.clone()),
        counters: Arc::new(RunCounters::default()),
        ctx: PipelineContext {
            keep_bad: opts.keep_bad,
            cancel,
        },
    }
}
