//! Public and internal types for the svsdecode API and pipeline.

use std::path::PathBuf;

use crate::utils::config::{DEFAULT_FILES_PER_DIR, DEFAULT_WORKERS};

/// Run options (CLI, config file, or lib). Call [`Opts::normalized`] before a run.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Output root. Per-identifier directories are created beneath it.
    pub datadir: PathBuf,
    /// Keep inputs with the reserved `.bad` extension instead of filtering them out.
    pub keep_bad: bool,
    /// Files per shard directory. Non-positive means [`DEFAULT_FILES_PER_DIR`].
    pub files_per_dir: i64,
    /// Maximum concurrent file pipelines. Non-positive means [`DEFAULT_WORKERS`].
    pub workers: i64,
    /// Debug logging.
    pub verbose: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Opts {
            datadir: std::env::temp_dir(),
            keep_bad: false,
            files_per_dir: DEFAULT_FILES_PER_DIR,
            workers: DEFAULT_WORKERS,
            verbose: false,
        }
    }
}

impl Opts {
    /// Substitute defaults for non-positive shard size and worker count.
    pub fn normalized(mut self) -> Self {
        if self.files_per_dir <= 0 {
            self.files_per_dir = DEFAULT_FILES_PER_DIR;
        }
        if self.workers <= 0 {
            self.workers = DEFAULT_WORKERS;
        }
        self
    }

    /// Effective shard size (always > 0).
    pub fn files_per_dir(&self) -> u64 {
        match self.files_per_dir {
            n if n > 0 => n as u64,
            _ => DEFAULT_FILES_PER_DIR as u64,
        }
    }

    /// Effective worker count (always > 0).
    pub fn workers(&self) -> usize {
        match self.workers {
            n if n > 0 => n as usize,
            _ => DEFAULT_WORKERS as usize,
        }
    }
}

/// What one file's pipeline produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Sequence 1: verbatim payload copy.
    Intro(PathBuf),
    /// Data record: the CSV path (metadata document sits beside it with `.xml` appended).
    Data(PathBuf),
    /// Tag mismatch; nothing written.
    Skipped,
}

impl FileOutcome {
    pub fn output(&self) -> Option<&PathBuf> {
        match self {
            FileOutcome::Intro(p) | FileOutcome::Data(p) => Some(p),
            FileOutcome::Skipped => None,
        }
    }
}

/// Counts for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// True when the run stopped dispatching early on a cancel request.
    pub cancelled: bool,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.processed + self.failed + self.skipped
    }
}
