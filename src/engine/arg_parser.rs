use clap::Parser;
use std::path::PathBuf;

/// Decode SVS capture files into sharded CSV sample tables and XML metadata.
#[derive(Clone, Parser)]
#[command(name = "svsdecode")]
#[command(
    about = "Decode SVS capture files. Paths are walked recursively; with none given, paths are read from stdin, one per line."
)]
pub struct Cli {
    /// Files or directories to decode. Default: read paths from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output root directory. Default: the system temp directory.
    #[arg(short = 'd', long)]
    pub datadir: Option<PathBuf>,

    /// Keep files with the `.bad` extension instead of skipping them.
    #[arg(short = 'k', long)]
    pub keep_bad: bool,

    /// Files per shard directory. Non-positive values fall back to 512.
    #[arg(short = 'p', long, allow_negative_numbers = true, value_parser = clap::value_parser!(i64))]
    pub per_dir: Option<i64>,

    /// Files decoded concurrently. Non-positive values fall back to 4.
    #[arg(short = 'w', long, allow_negative_numbers = true, value_parser = clap::value_parser!(i64))]
    pub workers: Option<i64>,

    /// Verbose output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
