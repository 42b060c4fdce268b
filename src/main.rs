//! svsdecode CLI: decode capture files named on the command line or listed on stdin.

use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;
use svsdecode::engine::arg_parser::Cli;
use svsdecode::engine::handle_run;

fn main() -> ExitCode {
    let start_time = Instant::now();
    let cli = Cli::parse();
    if let Err(e) = handle_run(&cli) {
        log::error!("{}", e);
        return ExitCode::from(e.exit_code() as u8);
    }
    log::debug!("Total time: {:?}", start_time.elapsed());
    ExitCode::SUCCESS
}
