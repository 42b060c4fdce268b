//! svsdecode: decode SVS capture files into sharded CSV sample tables and XML metadata

pub mod engine;
pub mod format;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

pub use engine::process_file;
pub use pipeline::{InputSource, RunError};

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Result alias used by public svsdecode API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Decode every file under `paths` (each walked recursively) into `opts.datadir`.
///
/// At most `opts.workers()` files are in flight. Setting `cancel` stops dispatch of new files;
/// files already started run to completion before this returns.
///
/// ```ignore
/// let opts = svsdecode::Opts { datadir: "/data/out".into(), ..Default::default() };
/// let summary = svsdecode::process_paths(vec!["/data/in".into()], &opts, Default::default())?;
/// println!("{} files written", summary.processed);
/// ```
pub fn process_paths(
    paths: Vec<PathBuf>,
    opts: &Opts,
    cancel: Arc<AtomicBool>,
) -> std::result::Result<RunSummary, RunError> {
    pipeline::run_pipeline(InputSource::Paths(paths), opts, cancel)
}
