//! Feed loop: expands inputs (arguments or stdin lines) into files and sends them to workers.

use crossbeam_channel::Sender;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use walkdir::WalkDir;

use crate::utils::config::BAD_EXTENSION;

use super::context::{Job, PipelineContext};
use super::error_handler::RunError;

/// Where input paths come from.
pub enum InputSource {
    /// Paths given directly; each is walked recursively.
    Paths(Vec<PathBuf>),
    /// Newline-delimited paths (blank lines ignored); each is walked recursively.
    Lines(Box<dyn BufRead + Send>),
}

/// One result from a directory walk: either a file to consider or an error with optional path.
pub enum WalkOutcome {
    Ok(PathBuf),
    Err { msg: String, path: Option<PathBuf> },
}

/// Convert a walkdir result into [`WalkOutcome`]. Directories yield nothing.
pub fn to_outcome_walkdir(r: Result<walkdir::DirEntry, walkdir::Error>) -> Option<WalkOutcome> {
    match r {
        Ok(entry) if entry.file_type().is_dir() => None,
        Ok(entry) => Some(WalkOutcome::Ok(entry.into_path())),
        Err(err) => Some(WalkOutcome::Err {
            msg: format!("{}", err),
            path: err.path().map(PathBuf::from),
        }),
    }
}

/// Every non-directory under `root` (or `root` itself when it is a file).
fn walk_root(root: &Path) -> impl Iterator<Item = WalkOutcome> + use<> {
    WalkDir::new(root).into_iter().filter_map(to_outcome_walkdir)
}

/// True for the reserved `.bad` extension.
pub fn is_bad(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == BAD_EXTENSION)
}

/// Flatten a source into walk outcomes. Stdin lines are walked as they arrive.
pub fn source_iter(source: InputSource) -> Box<dyn Iterator<Item = WalkOutcome> + Send> {
    match source {
        InputSource::Paths(paths) => Box::new(paths.into_iter().flat_map(|p| walk_root(&p))),
        InputSource::Lines(reader) => Box::new(
            reader
                .lines()
                .map_while(|line| match line {
                    Ok(l) => Some(l),
                    Err(e) => {
                        log::warn!("stop reading input list: {}", e);
                        None
                    }
                })
                .filter_map(|l| {
                    let l = l.trim_end_matches('\r');
                    (!l.is_empty()).then(|| PathBuf::from(l))
                })
                .flat_map(|p| walk_root(&p)),
        ),
    }
}

pub fn spawn_feed_thread(
    job_tx: Sender<Job>,
    ctx: PipelineContext,
    source: InputSource,
) -> Result<JoinHandle<usize>, RunError> {
    thread::Builder::new()
        .name("svs-feed".to_string())
        .spawn(move || run_feed_loop(job_tx, ctx, source_iter(source)))
        .map_err(|e| RunError::Pool(format!("spawn feed thread: {}", e)))
}

/// Consume `iter`, drop `.bad` files unless kept, and send each file as a [`Job`].
/// Walk errors are logged and skipped. Stops early on cancel or when workers are gone.
/// Drops `job_tx` when done so workers drain and exit. Returns the number of jobs sent.
pub fn run_feed_loop<I>(job_tx: Sender<Job>, ctx: PipelineContext, iter: I) -> usize
where
    I: Iterator<Item = WalkOutcome>,
{
    let mut count = 0_usize;
    for outcome in iter {
        if ctx.cancelled() {
            log::debug!("cancel requested; stop dispatching after {} files", count);
            break;
        }
        match outcome {
            WalkOutcome::Ok(path) => {
                if !ctx.keep_bad && is_bad(&path) {
                    continue;
                }
                count += 1;
                if job_tx.send(Job { index: count, path }).is_err() {
                    count -= 1;
                    break;
                }
            }
            WalkOutcome::Err { msg, path } => match path {
                Some(p) => log::warn!("{}: {}", p.display(), msg),
                None => log::warn!("{}", msg),
            },
        }
    }
    drop(job_tx);
    count
}
