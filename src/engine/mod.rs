//! Engine module: per-file decoding steps and the CLI surface.

pub mod arg_parser;
pub mod handlers;
pub mod intro;
pub mod paths;
pub mod process;
pub mod samples;
pub mod xml;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use handlers::handle_run;
pub use intro::write_intro;
pub use paths::{
    ShardTarget, derived_base_name, file_base_name, identifier_from_filename, prepare_shard,
    shard_dir_name, shard_index,
};
pub use process::process_file;
pub use samples::{SampleBlock, column_label, encode_samples, format_sample};
pub use xml::{MetadataDocument, write_metadata};
