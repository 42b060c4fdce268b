//! Logger setup. Kept in its own test binary: the global logger and `RUST_LOG` are process-wide.

use log::{Level, LevelFilter};
use svsdecode::utils::setup_logging;

#[test]
fn test_rust_log_raises_crate_level() {
    // SAFETY: the only test in this binary, so nothing reads the environment concurrently.
    unsafe { std::env::set_var("RUST_LOG", "svsdecode=trace") };
    setup_logging(false);

    assert_eq!(log::max_level(), LevelFilter::Trace);
    assert!(log::log_enabled!(target: "svsdecode::pipeline::workers", Level::Trace));
    assert!(log::log_enabled!(target: "walkdir", Level::Warn));
    assert!(!log::log_enabled!(target: "walkdir", Level::Info));
}
