pub mod app_toml;
pub mod config;
pub mod fs;
pub mod logger;

pub use config::*;
pub use fs::ensure_dir;
pub use logger::setup_logging;
