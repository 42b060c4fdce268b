//! Output naming: identifier from input filename, shard directories, derived artifact names.

use std::io;
use std::path::{Path, PathBuf};

use crate::format::PacketMetadata;
use crate::utils::config::OutputNames;
use crate::utils::ensure_dir;

/// Identifier carried in an input filename `<discriminator>_<id parts...>_<5 trailing segments>`.
///
/// Drops the first segment and the last five; the middle is rejoined with `_`.
/// No validation: names with fewer than seven segments give an empty identifier.
pub fn identifier_from_filename(name: &str) -> String {
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() <= OutputNames::TRAILING_SEGMENTS + 1 {
        return String::new();
    }
    parts[1..parts.len() - OutputNames::TRAILING_SEGMENTS].join("_")
}

/// Base name (final path component) of `path` as text, lossy.
pub fn file_base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `sequence / per`, floor. `per` must be positive.
pub fn shard_index(sequence: u32, per: u64) -> u64 {
    u64::from(sequence) / per
}

/// Zero-padded six-digit directory name for a shard index.
pub fn shard_dir_name(index: u64) -> String {
    format!("{:0width$}", index, width = OutputNames::SHARD_WIDTH)
}

/// `<originator-id 4-hex>_<identifier>_<yyyyMMdd_HHmmss>_<originator-seq 6-digit>`, no extension.
pub fn derived_base_name(meta: &PacketMetadata, identifier: &str) -> String {
    format!(
        "{:04x}_{}_{}_{:06}",
        meta.source,
        identifier,
        meta.acquisition.to_compact(),
        meta.sequence
    )
}

/// Where one data record's artifacts go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShardTarget {
    pub base_name: String,
    pub shard_index: u64,
    pub dir: PathBuf,
}

impl ShardTarget {
    pub fn csv_path(&self) -> PathBuf {
        self.dir
            .join(format!("{}.{}", self.base_name, OutputNames::CSV_EXT))
    }

    /// Metadata companion: the CSV filename with `.xml` appended.
    pub fn xml_path(&self) -> PathBuf {
        let mut name = self.csv_path().into_os_string();
        name.push(OutputNames::XML_SUFFIX);
        PathBuf::from(name)
    }
}

/// Compute the shard and derived name for `meta` and make sure `<id_dir>/<shard>` exists.
pub fn prepare_shard(
    meta: &PacketMetadata,
    id_dir: &Path,
    identifier: &str,
    per: u64,
) -> io::Result<ShardTarget> {
    let shard_index = shard_index(meta.sequence, per);
    let dir = id_dir.join(shard_dir_name(shard_index));
    ensure_dir(&dir)?;
    Ok(ShardTarget {
        base_name: derived_base_name(meta, identifier),
        shard_index,
        dir,
    })
}
