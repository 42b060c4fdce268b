//! Introductory records (sequence 1): payload copied verbatim to `<id>/<id>.ini`.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::format::DecodeError;
use crate::utils::config::OutputNames;

/// Copy everything left in `r` to `<id_dir>/<identifier>.ini`, overwriting. Returns the written path.
/// A failed copy may leave a truncated file behind.
pub fn write_intro<R: Read>(
    r: &mut R,
    id_dir: &Path,
    identifier: &str,
) -> Result<PathBuf, DecodeError> {
    let path = id_dir.join(format!("{}.{}", identifier, OutputNames::INTRO_EXT));
    let mut w = BufWriter::new(File::create(&path)?);
    io::copy(r, &mut w)?;
    w.flush()?;
    Ok(path)
}
