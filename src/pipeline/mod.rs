//! Bounded concurrent runner: feed thread, job channel, file workers, full drain.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;
pub mod workers;

pub use context::{
    Job, PipelineChannels, PipelineContext, RunCounters, create_pipeline_channels,
};
pub use error_handler::{RunError, report_summary};
pub use orchestrator::{run_pipeline, run_pipeline_with, shutdown_workers};
pub use walk::{InputSource, WalkOutcome, is_bad, run_feed_loop, spawn_feed_thread};
pub use workers::{FileProcessor, spawn_file_workers};
