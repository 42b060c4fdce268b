//! CLI command handler: merge config file and flags, then run the pipeline.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::BufReader;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::Opts;
use crate::engine::arg_parser::Cli;
use crate::pipeline::{InputSource, RunError, report_summary, run_pipeline};
use crate::utils::app_toml::{apply_file_to_opts, load_app_toml};
use crate::utils::setup_logging;

/// Defaults, then `.svsdecode.toml` in the working directory, then explicit flags.
fn setup_opts(cli: &Cli) -> Opts {
    let mut opts = Opts::default();
    let file = std::env::current_dir()
        .context("current directory")
        .and_then(|dir| load_app_toml(&dir));
    if let Ok(Some(ref file)) = file {
        apply_file_to_opts(file, &mut opts);
    }
    if let Some(ref d) = cli.datadir {
        opts.datadir = d.clone();
    }
    if let Some(p) = cli.per_dir {
        opts.files_per_dir = p;
    }
    if let Some(w) = cli.workers {
        opts.workers = w;
    }
    opts.keep_bad |= cli.keep_bad;
    opts.verbose |= cli.verbose;

    setup_logging(opts.verbose);
    if let Err(e) = file {
        warn!("Ignoring config file: {:#}", e);
    }
    opts.normalized()
}

/// Decode every input named on the command line (or listed on stdin).
pub fn handle_run(cli: &Cli) -> Result<(), RunError> {
    let opts = setup_opts(cli);
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        opts
    );

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::Relaxed);
    }) {
        warn!("Ctrl+C handler unavailable: {}", e);
    }

    let source = if cli.paths.is_empty() {
        debug!("Reading input paths from stdin");
        InputSource::Lines(Box::new(BufReader::new(std::io::stdin())))
    } else {
        InputSource::Paths(cli.paths.clone())
    };

    let summary = run_pipeline(source, &opts, cancel)?;
    report_summary(&summary);
    Ok(())
}
