use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::RunSummary;
use crate::utils::config::ExitCodes;

/// Failures that end the whole run. Per-file failures never reach this level.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("create output root {}: {source}", path.display())]
    OutputRoot { path: PathBuf, source: io::Error },

    /// Worker admission or final drain failed (thread spawn error, panicked worker).
    #[error("worker pool: {0}")]
    Pool(String),
}

impl RunError {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::OutputRoot { .. } => ExitCodes::OUTPUT_ROOT,
            RunError::Pool(_) => ExitCodes::FATAL,
        }
    }
}

/// Log the end-of-run tally. Call after the pool has fully drained.
pub fn report_summary(summary: &RunSummary) {
    if summary.cancelled {
        log::warn!("Cancelled; files not yet started were not processed");
    }
    if summary.failed > 0 {
        log::warn!("{} files failed", summary.failed);
    }
    log::info!(
        "Done: {} processed, {} failed, {} skipped",
        summary.processed,
        summary.failed,
        summary.skipped
    );
}
