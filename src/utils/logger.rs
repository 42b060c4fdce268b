//! Terminal logging: colored level tags on stdout, crate at Info (Debug with `-v`), `RUST_LOG` on top.

use colored::Colorize;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use std::io::Write;

use crate::utils::config::PackagePaths;

fn crate_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger once; later calls are no-ops.
///
/// Dependencies log at Warn and this crate at Info (Debug when `verbose`). `RUST_LOG` is
/// parsed last: a bare level replaces the Warn default, `svsdecode=<level>` replaces the crate's.
pub fn setup_logging(verbose: bool) {
    let pkg = PackagePaths::get().pkg_name();

    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(pkg, crate_level(verbose))
        .parse_default_env()
        .target(Target::Stdout)
        .format(move |buf, record| {
            let tag = pkg.cyan();
            match record.level() {
                Level::Error => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    tag,
                    "ERROR".red(),
                    record.target().white(),
                    record.args()
                ),
                Level::Warn => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    tag,
                    "WARN".yellow(),
                    record.target().white(),
                    record.args()
                ),
                Level::Info => writeln!(buf, "[{}] {}", tag, record.args()),
                Level::Debug | Level::Trace => {
                    writeln!(buf, "[{}] {}", tag, record.args().to_string().dimmed())
                }
            }
        })
        .try_init();
}
