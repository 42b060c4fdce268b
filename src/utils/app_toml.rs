//! Load `.svsdecode.toml` from the working directory (CLI only). Lib callers build [`Opts`] directly.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::Opts;
use crate::utils::config::PackagePaths;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AppToml {
    #[serde(default)]
    settings: SettingsSection,
}

#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    datadir: Option<String>,
    keep_bad: Option<bool>,
    per_dir: Option<i64>,
    workers: Option<i64>,
    verbose: Option<bool>,
}

/// Load the settings file from `dir`. `Ok(None)` when there is no file; invalid TOML is an error.
pub(crate) fn load_app_toml(dir: &Path) -> Result<Option<AppToml>> {
    let path = dir.join(PackagePaths::get().config_filename());
    if !path.is_file() {
        return Ok(None);
    }
    let s = std::fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let file = parse_app_toml(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(file))
}

pub(crate) fn parse_app_toml(s: &str) -> Result<AppToml, toml::de::Error> {
    toml::from_str(s)
}

/// Overwrite opts field from file when present.
macro_rules! apply_file_opt {
    ($set:expr, $opts:expr, $set_field:ident => $opts_field:ident) => {
        if let Some(v) = $set.$set_field {
            $opts.$opts_field = v;
        }
    };
}

/// Apply file config to opts (only fields present in the file). Call before applying CLI.
pub(crate) fn apply_file_to_opts(file: &AppToml, opts: &mut Opts) {
    let set = &file.settings;
    if let Some(ref d) = set.datadir {
        opts.datadir = PathBuf::from(d);
    }
    apply_file_opt!(set, opts, keep_bad => keep_bad);
    apply_file_opt!(set, opts, per_dir => files_per_dir);
    apply_file_opt!(set, opts, workers => workers);
    apply_file_opt!(set, opts, verbose => verbose);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_only_touches_present_fields() {
        let file = parse_app_toml("[settings]\nworkers = 9\nkeep_bad = true\n").unwrap();
        let mut opts = Opts::default();
        apply_file_to_opts(&file, &mut opts);
        assert_eq!(opts.workers, 9);
        assert!(opts.keep_bad);
        assert_eq!(opts.files_per_dir, Opts::default().files_per_dir);
    }

    #[test]
    fn empty_file_is_valid() {
        assert!(parse_app_toml("").is_ok());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(parse_app_toml("[settings]\nworkers = \"many\"\n").is_err());
    }
}
