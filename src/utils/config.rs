//! Application configuration constants.
//! Defaults and naming in one place.

use std::sync::OnceLock;

// ---- Package / paths (from CARGO_PKG_NAME, cached) ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    config_filename: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                config_filename: format!(".{pkg}.toml"),
            }
        })
    }

    /// Crate name, used as the log tag and the crate's log filter target.
    pub fn pkg_name(&self) -> &'static str {
        self.pkg_name
    }

    /// Optional settings file looked up in the working directory (CLI only).
    pub fn config_filename(&self) -> &str {
        &self.config_filename
    }
}

// ---- Run tuning ----

/// Files per shard directory when unset or non-positive.
pub const DEFAULT_FILES_PER_DIR: i64 = 512;

/// Concurrent file pipelines when unset or non-positive.
pub const DEFAULT_WORKERS: i64 = 4;

/// Inputs with this extension are skipped unless `keep_bad` is set.
pub const BAD_EXTENSION: &str = "bad";

// ---- Output naming ----

pub struct OutputNames;

impl OutputNames {
    /// Extension of the introductory payload copy.
    pub const INTRO_EXT: &'static str = "ini";
    /// Extension of the sample table.
    pub const CSV_EXT: &'static str = "csv";
    /// Appended after the full CSV filename for the metadata companion.
    pub const XML_SUFFIX: &'static str = ".xml";
    /// Root element of the metadata document.
    pub const XML_ROOT: &'static str = "metadata";
    /// Digits in a shard directory name.
    pub const SHARD_WIDTH: usize = 6;
    /// Underscore segments after the identifier in an input filename.
    pub const TRAILING_SEGMENTS: usize = 5;
}

// ---- Process exit codes ----

pub struct ExitCodes;

impl ExitCodes {
    pub const OUTPUT_ROOT: i32 = 12;
    pub const FATAL: i32 = 1;
}
